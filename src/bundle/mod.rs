//! Size-bounding pipeline for review content.
//!
//! Fetched files pass through two ceilings before prompt assembly: a
//! per-file limit that elides the middle of oversized files, and an
//! aggregate limit that admits a strict prefix of the file sequence.

pub mod budget;
pub mod truncate;

pub use budget::budget_files;
pub use truncate::{ELISION_MARKER, bound_content};

use crate::models::{BoundedFile, Bundle, SnippetFile};

/// Run the full bounding pipeline over a file sequence.
///
/// Each file's content is bounded to `max_file_bytes`, then the bounded
/// sequence is budgeted against `max_bundle_bytes` in order.
pub fn build_bundle(
    files: Vec<SnippetFile>,
    max_file_bytes: usize,
    max_bundle_bytes: usize,
) -> Bundle {
    let bounded = files
        .into_iter()
        .map(|f| {
            let (content, truncated) = bound_content(&f.content, max_file_bytes);
            BoundedFile {
                path: f.path,
                content,
                truncated,
            }
        })
        .collect();

    budget_files(bounded, max_bundle_bytes)
}
