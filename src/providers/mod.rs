//! External model integration.
//!
//! The [`ReviewProvider`] trait is the seam between the review pipeline
//! and rig-core, so the pipeline and its tests never touch the LLM
//! library directly.

pub mod rig;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the review provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("LLM request failed: {0}")]
    ApiError(String),

    #[error("provider misconfigured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM-backed code review.
///
/// Implementations own client construction and the completion call. The
/// response comes back as raw text; callers interpret it, since models
/// do not reliably honor the response schema.
#[async_trait]
pub trait ReviewProvider: Send + Sync {
    /// Send one review prompt and return the model's raw response text.
    async fn review(&self, preamble: &str, prompt: &str) -> Result<String, ProviderError>;
}
