//! File content types flowing from fetch through truncation into the prompt.

use serde::{Deserialize, Serialize};

/// A named piece of source code submitted for review, before any
/// size limits have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetFile {
    /// Display path, repository-relative for GitHub submissions.
    pub path: String,
    /// Raw text content.
    pub content: String,
}

impl SnippetFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A file whose content has passed through the per-file size limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedFile {
    pub path: String,
    pub content: String,
    /// Whether the middle of the content was elided to fit the limit.
    pub truncated: bool,
}

/// The set of files that fit within the aggregate budget, ready for
/// prompt assembly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bundle {
    /// Files admitted to the bundle, in submission order.
    pub files: Vec<BoundedFile>,
    /// True when any file was individually elided or dropped from the
    /// bundle for budget reasons.
    pub truncated: bool,
}

impl Bundle {
    /// Total content bytes across all admitted files.
    pub fn content_bytes(&self) -> usize {
        self.files.iter().map(|f| f.content.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
