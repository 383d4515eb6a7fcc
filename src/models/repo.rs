//! Repository reference types parsed from GitHub URLs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed reference to a GitHub repository, optionally pinned to a
/// ref and narrowed to a subdirectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoReference {
    /// Repository owner (user or organisation).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch, tag, or commit SHA. `None` means the default branch.
    #[serde(rename = "ref")]
    pub ref_: Option<String>,
    /// Subdirectory path within the repository. `None` means the root.
    pub path: Option<String>,
}

impl RepoReference {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            ref_: None,
            path: None,
        }
    }

    pub fn with_ref(mut self, ref_: impl Into<String>) -> Self {
        self.ref_ = Some(ref_.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// The `owner/repo` slug.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)?;
        if let Some(ref_) = &self.ref_ {
            write!(f, "@{ref_}")?;
        }
        if let Some(path) = &self.path {
            write!(f, ":{path}")?;
        }
        Ok(())
    }
}

/// The reviewable files discovered in a repository, along with the ref
/// they were resolved against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListing {
    /// The ref the listing was taken from. Always concrete, never empty;
    /// when the reference carried no ref this is the default branch.
    #[serde(rename = "ref")]
    pub ref_: String,
    /// Repository-relative paths of reviewable files.
    pub files: Vec<String>,
}
