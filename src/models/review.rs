//! Review result types returned by the model.
//!
//! These shapes are a contract with the external model, enforced through
//! the response schema passed alongside the prompt. The core never
//! computes them itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of review categories enumerated in the prompt header.
pub const REVIEW_CATEGORIES: &[&str] = &[
    "Code Quality",
    "Potential Bugs",
    "Performance",
    "Security",
    "Readability & Maintainability",
    "Best Practices",
];

/// Severity level assigned to a review category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Minor or stylistic concern.
    Low,
    /// Issue worth addressing.
    Medium,
    /// Issue that should block a merge.
    High,
}

/// Custom deserializer for Severity that accepts common LLM variations.
///
/// Models sometimes return values like "critical", "warning", "info", or
/// "minor" instead of the expected "HIGH"/"MEDIUM"/"LOW". This normalizes
/// them rather than failing the whole payload.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "low" | "minor" | "trivial" | "info" | "note" | "suggestion" | "style"
                => Ok(Severity::Low),
            "medium" | "moderate" | "warning" | "major"
                => Ok(Severity::Medium),
            "high" | "critical" | "severe" | "error" | "blocker" | "fatal"
                => Ok(Severity::High),
            _ => {
                // Fall back to medium for unrecognised severities rather than failing
                Ok(Severity::Medium)
            }
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(format!("unknown severity: {s}")),
        }
    }
}

/// A concrete improvement proposed by the model for one category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// What to change and why.
    pub description: String,
    /// Optional code snippet illustrating the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
}

/// Findings for a single review category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReview {
    /// Category name, expected to come from [`REVIEW_CATEGORIES`].
    pub category: String,
    /// Individual observations for this category.
    pub findings: Vec<String>,
    /// Severity of the category as a whole.
    pub severity: Severity,
    /// Optional concrete suggestions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

/// The model's structured review of one submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    /// Name of the reviewed file (the first file for multi-file bundles).
    pub file_name: String,
    /// Per-category findings.
    pub categories: Vec<CategoryReview>,
}

/// Summary statistics across a review result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub categories: usize,
    pub findings: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Summary {
    /// Compute a summary from a parsed review result.
    pub fn from_result(result: &ReviewResult) -> Self {
        let mut s = Summary::default();
        for cat in &result.categories {
            s.categories += 1;
            s.findings += cat.findings.len();
            match cat.severity {
                Severity::High => s.high += 1,
                Severity::Medium => s.medium += 1,
                Severity::Low => s.low += 1,
            }
        }
        s
    }
}
