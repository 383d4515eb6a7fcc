//! GitHub repository access.
//!
//! Parses repository URLs, lists reviewable files through the tree API,
//! and fetches file contents. The [`RepoSource`] trait decouples the
//! listing and review pipeline from the live HTTP client.

pub mod client;
pub mod list;
pub mod reference;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::RepoReference;

pub use client::GithubClient;
pub use list::list_files;
pub use reference::parse_repo_url;

/// Errors from GitHub URL parsing and API access.
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("invalid repository URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("GitHub API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request to GitHub failed: {0}")]
    Request(String),

    #[error("failed to fetch '{path}': {reason}")]
    Fetch { path: String, reason: String },
}

/// One entry of a recursive tree listing.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    /// Repository-relative path.
    pub path: String,
    /// `"blob"` for files, `"tree"` for directories.
    #[serde(rename = "type")]
    pub kind: String,
}

impl TreeEntry {
    pub fn is_blob(&self) -> bool {
        self.kind == "blob"
    }
}

/// Trait for reading repository metadata and contents.
///
/// Implemented by [`GithubClient`] for the live API. The listing and
/// review pipeline only depends on this trait.
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Resolve the repository's default branch.
    async fn default_branch(&self, reference: &RepoReference) -> Result<String, GithubError>;

    /// Retrieve the full recursive tree at `ref_`.
    async fn tree(
        &self,
        reference: &RepoReference,
        ref_: &str,
    ) -> Result<Vec<TreeEntry>, GithubError>;

    /// Retrieve one file's decoded text content at `ref_`.
    async fn file_content(
        &self,
        reference: &RepoReference,
        ref_: &str,
        path: &str,
    ) -> Result<String, GithubError>;
}
