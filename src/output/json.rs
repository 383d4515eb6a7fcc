//! JSON output renderer.
//!
//! Reviews render as `{"review": ..., "truncated": ..., "totalBytes": ...,
//! "fileCount": ...}` when the model response parses, and as the raw
//! response object otherwise. Errors render as `{"error": ..., "status": ...}`.

use crate::output::OutputRenderer;
use crate::output::parse::parse_review;
use crate::service::{AnalyzeResponse, ListFilesResponse, ServiceError};

/// JSON output renderer.
pub struct JsonRenderer;

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

impl OutputRenderer for JsonRenderer {
    fn render_review(&self, response: &AnalyzeResponse) -> String {
        let output = match parse_review(&response.text) {
            Some(review) => serde_json::json!({
                "review": review,
                "truncated": response.truncated,
                "totalBytes": response.total_bytes,
                "fileCount": response.file_count,
            }),
            None => serde_json::json!(response),
        };

        pretty(&output)
    }

    fn render_listing(&self, listing: &ListFilesResponse) -> String {
        pretty(&serde_json::json!(listing))
    }

    fn render_error(&self, error: &ServiceError) -> String {
        let output = serde_json::json!({
            "error": error.to_string(),
            "status": error.status(),
        });

        pretty(&output)
    }
}
