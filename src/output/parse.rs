//! Tolerant extraction of structured reviews from raw model text.
//!
//! With `output_schema` enforcing the JSON schema at the provider level,
//! the response is expected to be valid JSON. Some providers still wrap
//! it in markdown code fences or surrounding prose, so several candidate
//! slices are tried in turn. Extraction failure is not an error; callers
//! fall back to showing the raw text.

use crate::models::ReviewResult;

/// Regex for extracting content inside markdown code fences.
///
/// The closing ``` must appear at the start of a line (`\n````) to avoid
/// matching triple-backticks embedded inside JSON string values (e.g.
/// suggestion fields containing ```rust code examples).
static FENCE_RE: std::sync::LazyLock<regex::Regex> =
    std::sync::LazyLock::new(|| regex::Regex::new(r"(?s)```(?:json)?\s*\n(.*?)\n```").unwrap());

/// Parse the model's response text into a structured review.
///
/// Tries the raw text first, then a brace-delimited slice, then any
/// fenced blocks. Returns `None` when no candidate parses as a
/// [`ReviewResult`].
pub fn parse_review(response: &str) -> Option<ReviewResult> {
    let trimmed = response.trim();

    if trimmed.is_empty() {
        return None;
    }

    for candidate in extract_json_candidates(trimmed) {
        if let Ok(review) = serde_json::from_str::<ReviewResult>(&candidate) {
            return Some(review);
        }
    }

    None
}

/// Extract candidate JSON strings from a response.
///
/// Returns the trimmed response itself, a brace-delimited slice, and any
/// content inside markdown code fences (```json ... ``` or ``` ... ```).
fn extract_json_candidates(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    // First candidate: the raw text
    candidates.push(text.to_string());

    // Second: a brace-delimited slice, first '{' to last '}'. This
    // holds up when the response nests code fences inside JSON string
    // values.
    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            candidates.push(text[start..=end].to_string());
        }
    }

    // Third: extract content from markdown code fences.
    for cap in FENCE_RE.captures_iter(text) {
        if let Some(inner) = cap.get(1) {
            let inner_trimmed = inner.as_str().trim();
            if !inner_trimmed.is_empty() {
                candidates.push(inner_trimmed.to_string());
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    const PLAIN_REVIEW: &str = r#"{
        "fileName": "src/main.rs",
        "categories": [
            {
                "category": "Potential Bugs",
                "findings": ["The loop index can overflow."],
                "severity": "HIGH",
                "suggestions": [
                    {
                        "description": "Use checked_add.",
                        "codeExample": "i = i.checked_add(1)?;"
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_bare_json_object() {
        let review = parse_review(PLAIN_REVIEW).unwrap();
        assert_eq!(review.file_name, "src/main.rs");
        assert_eq!(review.categories.len(), 1);
        assert_eq!(review.categories[0].severity, Severity::High);
    }

    #[test]
    fn parses_fenced_json() {
        let response = format!("```json\n{PLAIN_REVIEW}\n```");
        let review = parse_review(&response).unwrap();
        assert_eq!(review.file_name, "src/main.rs");
    }

    #[test]
    fn parses_json_surrounded_by_prose() {
        let response = format!("Here is the review you asked for:\n\n{PLAIN_REVIEW}\n\nLet me know!");
        let review = parse_review(&response).unwrap();
        assert_eq!(review.categories[0].findings.len(), 1);
    }

    #[test]
    fn tolerates_nonstandard_severity_words() {
        let response = r#"{
            "fileName": "a.rs",
            "categories": [
                {"category": "Security", "findings": ["Hardcoded key."], "severity": "critical"}
            ]
        }"#;
        let review = parse_review(response).unwrap();
        assert_eq!(review.categories[0].severity, Severity::High);
    }

    #[test]
    fn empty_response_yields_none() {
        assert!(parse_review("").is_none());
        assert!(parse_review("   \n  ").is_none());
    }

    #[test]
    fn prose_without_json_yields_none() {
        assert!(parse_review("I could not review this code.").is_none());
    }

    #[test]
    fn fence_inside_string_value_does_not_break_extraction() {
        let response = r#"{
            "fileName": "lib.rs",
            "categories": [
                {
                    "category": "Readability & Maintainability",
                    "findings": ["Long function."],
                    "severity": "LOW",
                    "suggestions": [
                        {"description": "Split it.", "codeExample": "```rust\nfn helper() {}\n```"}
                    ]
                }
            ]
        }"#;
        let review = parse_review(response).unwrap();
        let suggestions = review.categories[0].suggestions.as_ref().unwrap();
        assert!(suggestions[0].code_example.as_ref().unwrap().contains("helper"));
    }

    #[test]
    fn candidates_include_raw_text_first() {
        let candidates = extract_json_candidates("plain text");
        assert_eq!(candidates[0], "plain text");
    }
}
