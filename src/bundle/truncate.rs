//! Per-file content bounding.

/// Marker inserted where the middle of an oversized file was removed.
pub const ELISION_MARKER: &str = "\n\n/* ... truncated: middle of file elided ... */\n\n";

/// Bound one file's content to roughly `limit` bytes.
///
/// Content whose byte length is within the limit passes through
/// unchanged. Oversized content keeps the first and last `limit / 2`
/// characters around [`ELISION_MARKER`], preserving the head (imports,
/// declarations) and the tail (exports, trailing definitions). The
/// split point counts characters rather than bytes, so multi-byte text
/// can land slightly over the limit.
pub fn bound_content(content: &str, limit: usize) -> (String, bool) {
    if content.len() <= limit {
        return (content.to_string(), false);
    }

    let half = limit / 2;
    let total_chars = content.chars().count();
    let head: String = content.chars().take(half).collect();
    let tail: String = content
        .chars()
        .skip(total_chars.saturating_sub(half))
        .collect();

    (format!("{head}{ELISION_MARKER}{tail}"), true)
}
