//! Live GitHub REST API client.
//!
//! Talks to `api.github.com` for repository metadata, recursive trees,
//! and file contents, falling back to `raw.githubusercontent.com` when
//! the contents endpoint does not yield base64 bytes. Requests carry a
//! bearer token when one is configured; without it the public rate
//! limits apply.

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

use crate::constants::{GITHUB_API_URL, GITHUB_RAW_URL, USER_AGENT};
use crate::github::{GithubError, RepoSource, TreeEntry};
use crate::models::RepoReference;

/// HTTP client for the GitHub REST API.
pub struct GithubClient {
    http: reqwest::Client,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RepoMetadata {
    default_branch: String,
}

/// Recursive tree listing. GitHub marks very large trees as truncated
/// in an extra response field; the listing is used as-is either way.
#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    encoding: String,
}

impl GithubClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        req
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, GithubError>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = self
            .get(url)
            .send()
            .await
            .map_err(|e| GithubError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(GithubError::Api {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| GithubError::Request(format!("failed to parse response: {e}")))
    }

    /// Fetch through the contents endpoint, which returns base64 bytes.
    async fn contents(
        &self,
        reference: &RepoReference,
        ref_: &str,
        path: &str,
    ) -> Result<String, GithubError> {
        let url = format!(
            "{GITHUB_API_URL}/repos/{}/{}/contents/{path}?ref={ref_}",
            reference.owner, reference.repo
        );
        let body: ContentsResponse = self.get_json(&url).await?;
        if body.encoding != "base64" {
            return Err(GithubError::Fetch {
                path: path.to_string(),
                reason: format!("unexpected content encoding '{}'", body.encoding),
            });
        }
        decode_base64_content(&body.content).map_err(|reason| GithubError::Fetch {
            path: path.to_string(),
            reason,
        })
    }

    /// Fallback fetch straight from the raw-content host.
    async fn raw(
        &self,
        reference: &RepoReference,
        ref_: &str,
        path: &str,
    ) -> Result<String, GithubError> {
        let url = format!(
            "{GITHUB_RAW_URL}/{}/{}/{ref_}/{path}",
            reference.owner, reference.repo
        );
        let resp = self.get(&url).send().await.map_err(|e| GithubError::Fetch {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GithubError::Fetch {
                path: path.to_string(),
                reason: format!("raw fetch returned HTTP {status}"),
            });
        }

        resp.text().await.map_err(|e| GithubError::Fetch {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl RepoSource for GithubClient {
    async fn default_branch(&self, reference: &RepoReference) -> Result<String, GithubError> {
        let url = format!(
            "{GITHUB_API_URL}/repos/{}/{}",
            reference.owner, reference.repo
        );
        let meta: RepoMetadata = self.get_json(&url).await?;
        Ok(meta.default_branch)
    }

    async fn tree(
        &self,
        reference: &RepoReference,
        ref_: &str,
    ) -> Result<Vec<TreeEntry>, GithubError> {
        let url = format!(
            "{GITHUB_API_URL}/repos/{}/{}/git/trees/{ref_}?recursive=1",
            reference.owner, reference.repo
        );
        let body: TreeResponse = self.get_json(&url).await?;
        Ok(body.tree)
    }

    async fn file_content(
        &self,
        reference: &RepoReference,
        ref_: &str,
        path: &str,
    ) -> Result<String, GithubError> {
        match self.contents(reference, ref_, path).await {
            Ok(text) => Ok(text),
            Err(_) => self.raw(reference, ref_, path).await,
        }
    }
}

/// Decode a contents-endpoint payload. GitHub wraps the base64 text
/// with newlines, so whitespace is stripped first. Invalid UTF-8
/// sequences are replaced rather than rejected.
fn decode_base64_content(raw: &str) -> Result<String, String> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| format!("invalid base64 content: {e}"))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
