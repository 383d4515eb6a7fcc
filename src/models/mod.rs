//! Core data structures shared across the crate.
//!
//! Repository references, file bundles, and review results all live
//! here; other modules import from this module rather than reaching
//! into each other's internals.

pub mod bundle;
pub mod repo;
pub mod review;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use bundle::{BoundedFile, Bundle, SnippetFile};
pub use repo::{FileListing, RepoReference};
pub use review::{CategoryReview, ReviewResult, Severity, Suggestion, Summary};

/// Where the files under review come from.
#[derive(Debug, Clone)]
pub enum InputMode {
    /// Fetch files from a GitHub repository URL, optionally narrowed to
    /// specific paths within it.
    Github {
        repo_url: String,
        paths: Vec<String>,
    },
    /// Read local files and submit them directly.
    Snippet { files: Vec<PathBuf> },
}

/// LLM backends a review can run against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderName {
    #[default]
    Gemini,
    Anthropic,
    #[serde(rename = "openai")]
    OpenAI,
    /// Anything speaking the OpenAI API shape (Ollama, vLLM, proxies).
    #[serde(rename = "openai-compatible")]
    OpenAICompatible,
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderName::Gemini => write!(f, "gemini"),
            ProviderName::Anthropic => write!(f, "anthropic"),
            ProviderName::OpenAI => write!(f, "openai"),
            ProviderName::OpenAICompatible => write!(f, "openai-compatible"),
        }
    }
}

impl std::str::FromStr for ProviderName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(ProviderName::Gemini),
            "anthropic" => Ok(ProviderName::Anthropic),
            "openai" => Ok(ProviderName::OpenAI),
            "openai-compatible" => Ok(ProviderName::OpenAICompatible),
            other => Err(format!(
                "unknown provider '{other}' (expected gemini, anthropic, openai, \
                 or openai-compatible)"
            )),
        }
    }
}

impl ProviderName {
    /// Provider-specific environment variable holding the API key.
    ///
    /// The names follow the conventions rig-core's `from_env()`
    /// constructors read.
    pub fn api_key_env_var(self) -> &'static str {
        match self {
            ProviderName::Gemini => "GEMINI_API_KEY",
            ProviderName::Anthropic => "ANTHROPIC_API_KEY",
            ProviderName::OpenAI | ProviderName::OpenAICompatible => "OPENAI_API_KEY",
        }
    }

    /// Default model identifier used when none is configured.
    pub fn default_model(self) -> &'static str {
        match self {
            ProviderName::Gemini => "gemini-2.5-flash",
            ProviderName::Anthropic => "claude-sonnet-4-5",
            ProviderName::OpenAI | ProviderName::OpenAICompatible => "gpt-4o-mini",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(ProviderName, &str); 4] = [
        (ProviderName::Gemini, "gemini"),
        (ProviderName::Anthropic, "anthropic"),
        (ProviderName::OpenAI, "openai"),
        (ProviderName::OpenAICompatible, "openai-compatible"),
    ];

    #[test]
    fn display_and_from_str_agree() {
        for (variant, text) in ALL {
            assert_eq!(variant.to_string(), text);
            assert_eq!(text.parse::<ProviderName>().unwrap(), variant);
        }
    }

    #[test]
    fn from_str_ignores_case() {
        assert_eq!(
            "GEMINI".parse::<ProviderName>().unwrap(),
            ProviderName::Gemini
        );
        assert_eq!(
            "Anthropic".parse::<ProviderName>().unwrap(),
            ProviderName::Anthropic
        );
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "mistral".parse::<ProviderName>().unwrap_err();
        assert!(err.contains("unknown provider"));
        assert!(err.contains("mistral"));
    }

    #[test]
    fn serde_names_match_display_names() {
        for (variant, text) in ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{text}\""));
            let back: ProviderName = serde_json::from_str(&json).unwrap();
            assert_eq!(back, variant);
        }
    }

    #[test]
    fn default_provider_is_gemini() {
        assert_eq!(ProviderName::default(), ProviderName::Gemini);
    }

    #[test]
    fn every_provider_has_key_var_and_model() {
        for (variant, _) in ALL {
            assert!(variant.api_key_env_var().ends_with("_API_KEY"));
            assert!(!variant.default_model().is_empty());
        }
    }

    #[test]
    fn compatible_provider_shares_the_openai_key_var() {
        assert_eq!(
            ProviderName::OpenAICompatible.api_key_env_var(),
            ProviderName::OpenAI.api_key_env_var()
        );
    }
}
