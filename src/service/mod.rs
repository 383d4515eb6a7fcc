//! Review pipeline: gathers content, bounds it, and drives the model call.
//!
//! [`ReviewService`] owns its collaborators explicitly. Nothing here is
//! held in global state, so two services with different sources or
//! providers can coexist in one process.

use serde::Serialize;
use thiserror::Error;

use crate::bundle::build_bundle;
use crate::config::LimitsConfig;
use crate::github::{self, GithubError, RepoSource};
use crate::models::{RepoReference, SnippetFile};
use crate::prompt::{REVIEW_PREAMBLE, build_review_prompt};
use crate::providers::{ProviderError, ReviewProvider};

/// Errors from the review pipeline.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request itself is malformed or empty.
    #[error("{0}")]
    InvalidInput(String),

    /// GitHub rejected or failed a call.
    #[error(transparent)]
    Github(#[from] GithubError),

    /// The model call failed.
    #[error(transparent)]
    Model(#[from] ProviderError),
}

impl ServiceError {
    /// HTTP-style status code for structured error output.
    ///
    /// Bad requests map to 400, upstream GitHub failures to 502, and
    /// model failures to 500. URL parse errors count as bad requests
    /// even though they surface as [`GithubError`].
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::InvalidInput(_) => 400,
            ServiceError::Github(GithubError::InvalidUrl { .. }) => 400,
            ServiceError::Github(_) => 502,
            ServiceError::Model(_) => 500,
        }
    }
}

/// Reviewable files found under a repository URL.
#[derive(Debug, Clone, Serialize)]
pub struct ListFilesResponse {
    pub owner: String,
    pub repo: String,
    /// The resolved ref, either from the URL or the default branch.
    #[serde(rename = "ref")]
    pub ref_: String,
    /// Subpath the listing was restricted to, when the URL named one.
    #[serde(rename = "rootPath", skip_serializing_if = "Option::is_none")]
    pub root_path: Option<String>,
    pub files: Vec<String>,
}

/// List reviewable files for a GitHub repository URL.
///
/// Resolves the default branch when the URL does not pin a ref, then
/// filters the recursive tree down to text-like blobs under the URL's
/// subpath. Needs no model provider, so it is a free function rather
/// than a [`ReviewService`] method.
pub async fn list_files(
    source: &dyn RepoSource,
    repo_url: &str,
) -> Result<ListFilesResponse, ServiceError> {
    let reference = github::parse_repo_url(repo_url)?;
    let listing = github::list_files(source, &reference).await?;

    Ok(ListFilesResponse {
        owner: reference.owner,
        repo: reference.repo,
        ref_: listing.ref_,
        root_path: reference.path,
        files: listing.files,
    })
}

/// One review request, either pasted snippets or repository paths.
#[derive(Debug)]
pub enum AnalyzeRequest {
    /// Files supplied directly by the caller, reviewed as-is.
    Snippet { files: Vec<SnippetFile> },
    /// Files fetched from a GitHub repository.
    Github {
        reference: RepoReference,
        paths: Vec<String>,
    },
}

/// Outcome of a review request.
///
/// `text` is the model's raw response. Interpreting it is left to the
/// output layer, since models do not reliably honor the schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub text: String,
    /// Whether any file was elided or dropped to fit the size limits.
    pub truncated: bool,
    pub total_bytes: usize,
    pub file_count: usize,
}

/// Drives a review request end to end.
pub struct ReviewService {
    source: Box<dyn RepoSource>,
    provider: Box<dyn ReviewProvider>,
    limits: LimitsConfig,
}

impl ReviewService {
    /// Create a service from its collaborators.
    pub fn new(
        source: Box<dyn RepoSource>,
        provider: Box<dyn ReviewProvider>,
        limits: LimitsConfig,
    ) -> Self {
        Self {
            source,
            provider,
            limits,
        }
    }

    /// Run the full pipeline: gather content, bound it, prompt the model.
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse, ServiceError> {
        let files = self.gather(request).await?;
        let bundle = build_bundle(files, self.limits.max_file_bytes, self.limits.max_bundle_bytes);

        if bundle.is_empty() {
            return Err(ServiceError::InvalidInput(
                "size limits exclude every submitted file".to_string(),
            ));
        }

        let prompt = build_review_prompt(&bundle);
        let text = self.provider.review(REVIEW_PREAMBLE, &prompt).await?;

        Ok(AnalyzeResponse {
            text,
            truncated: bundle.truncated,
            total_bytes: bundle.content_bytes(),
            file_count: bundle.files.len(),
        })
    }

    /// Collect the raw files for a request.
    ///
    /// Files beyond the file cap are dropped in both modes before any
    /// fetching happens. GitHub paths are fetched sequentially in input
    /// order, and the first failed fetch aborts the whole request;
    /// there is no partial bundle.
    async fn gather(&self, request: AnalyzeRequest) -> Result<Vec<SnippetFile>, ServiceError> {
        match request {
            AnalyzeRequest::Snippet { mut files } => {
                if files.is_empty() {
                    return Err(ServiceError::InvalidInput(
                        "no files provided for review".to_string(),
                    ));
                }
                files.truncate(self.limits.max_files);
                Ok(files)
            }
            AnalyzeRequest::Github {
                reference,
                mut paths,
            } => {
                if paths.is_empty() {
                    return Err(ServiceError::InvalidInput(
                        "no file paths selected for review".to_string(),
                    ));
                }
                paths.truncate(self.limits.max_files);

                let ref_ = match &reference.ref_ {
                    Some(r) => r.clone(),
                    None => self.source.default_branch(&reference).await?,
                };

                let mut files = Vec::with_capacity(paths.len());
                for path in paths {
                    let content = self.source.file_content(&reference, &ref_, &path).await?;
                    files.push(SnippetFile::new(path, content));
                }
                Ok(files)
            }
        }
    }
}
