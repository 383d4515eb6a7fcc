//! Terminal renderer: styled flowing text grouped by review category.
//!
//! No tables. When the model response fails to parse as a structured
//! review, the raw text is shown instead.

use colored::Colorize;

use crate::models::{Severity, Summary};
use crate::output::OutputRenderer;
use crate::output::parse::parse_review;
use crate::service::{AnalyzeResponse, ListFilesResponse, ServiceError};

/// Renders reviews as colored terminal text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render_review(&self, response: &AnalyzeResponse) -> String {
        let mut output = String::new();

        match parse_review(&response.text) {
            Some(review) if review.categories.is_empty() => {
                output.push_str(&format!("{}", "  ✔ No issues found.\n".green()));
            }
            Some(review) => {
                output.push_str(&format!("{}\n\n", review.file_name.bold()));

                for category in &review.categories {
                    let (icon, severity_str) = match category.severity {
                        Severity::High => (
                            "✖".red().bold().to_string(),
                            "high".red().bold().to_string(),
                        ),
                        Severity::Medium => (
                            "⚠".yellow().bold().to_string(),
                            "medium".yellow().bold().to_string(),
                        ),
                        Severity::Low => (
                            "ℹ".blue().bold().to_string(),
                            "low".blue().bold().to_string(),
                        ),
                    };

                    output.push_str(&format!(
                        " {} {} ({})\n",
                        icon,
                        category.category.bold(),
                        severity_str
                    ));

                    for finding in &category.findings {
                        output.push_str(&format!("   {finding}\n"));
                    }

                    for suggestion in category.suggestions.iter().flatten() {
                        output.push_str(&format!(
                            "   {} {}\n",
                            "→".cyan(),
                            suggestion.description
                        ));
                        if let Some(ref example) = suggestion.code_example {
                            for line in example.lines() {
                                output.push_str(&format!("     {}\n", line.dimmed()));
                            }
                        }
                    }

                    output.push('\n');
                }

                // Summary line
                let summary = Summary::from_result(&review);
                output.push_str(&format!(
                    "{}\n",
                    "───────────────────────────────────".dimmed()
                ));
                output.push_str(&format!(
                    " {} finding(s) across {} categories: {} high, {} medium, {} low\n",
                    summary.findings.to_string().bold(),
                    summary.categories,
                    summary.high.to_string().red().bold(),
                    summary.medium.to_string().yellow().bold(),
                    summary.low.to_string().blue().bold(),
                ));
            }
            None => {
                // The model ignored the response schema; show what it sent.
                output.push_str(response.text.trim());
                output.push('\n');
            }
        }

        if response.truncated {
            output.push_str(&format!(
                " {} {}\n",
                "⚠".yellow(),
                "Some content was elided or dropped to fit the size limits.".dimmed()
            ));
        }

        output
    }

    fn render_listing(&self, listing: &ListFilesResponse) -> String {
        let mut output = String::new();

        let mut header = format!("{}/{} @ {}", listing.owner, listing.repo, listing.ref_);
        if let Some(ref root) = listing.root_path {
            header.push_str(&format!(" ({root})"));
        }
        output.push_str(&format!("{}\n\n", header.bold()));

        for file in &listing.files {
            output.push_str(&format!("  {file}\n"));
        }

        output.push_str(&format!(
            "\n {} reviewable file(s)\n",
            listing.files.len().to_string().bold()
        ));

        output
    }

    fn render_error(&self, error: &ServiceError) -> String {
        format!(" {} {}\n", "✖".red().bold(), error.to_string().red())
    }
}
