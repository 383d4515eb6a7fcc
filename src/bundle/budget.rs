//! Aggregate byte budgeting.

use crate::models::{BoundedFile, Bundle};

/// Admit files into a bundle while the running byte total stays within
/// `max_bundle_bytes`.
///
/// Admission walks the input in order. The first file that would cross
/// the ceiling stops admission entirely, so later files are excluded
/// even when they would individually fit. The result is always a strict
/// prefix of the input, never a reordered subset. Any exclusion, and
/// any per-file elision flag already raised, marks the bundle as
/// truncated.
pub fn budget_files(files: Vec<BoundedFile>, max_bundle_bytes: usize) -> Bundle {
    let mut bundle = Bundle::default();
    let mut total = 0usize;

    for file in files {
        let len = file.content.len();
        if total + len > max_bundle_bytes {
            bundle.truncated = true;
            break;
        }
        total += len;
        bundle.truncated |= file.truncated;
        bundle.files.push(file);
    }

    bundle
}
