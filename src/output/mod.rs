//! Output renderers: terminal and JSON.

pub mod json;
pub mod parse;
pub mod terminal;

use crate::service::{AnalyzeResponse, ListFilesResponse, ServiceError};

/// Trait for rendering pipeline results to an output format.
pub trait OutputRenderer {
    /// Render a completed review to a string.
    fn render_review(&self, response: &AnalyzeResponse) -> String;

    /// Render a repository file listing to a string.
    fn render_listing(&self, listing: &ListFilesResponse) -> String;

    /// Render a pipeline failure to a string.
    fn render_error(&self, error: &ServiceError) -> String;
}
