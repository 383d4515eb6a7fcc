//! Clap argument types and input validation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use codesift::output::OutputRenderer;
use codesift::output::json::JsonRenderer;
use codesift::output::terminal::TerminalRenderer;

/// Command-line interface for codesift.
#[derive(Parser, Debug)]
#[command(
    name = "codesift",
    version,
    about = "AI-powered code review for GitHub repositories and pasted snippets",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Review local files or files from a GitHub repository.
    Review(Box<ReviewArgs>),

    /// List reviewable files in a GitHub repository.
    ListFiles(ListFilesArgs),

    /// Print version information.
    Version,
}

/// `list-files` subcommand flags.
#[derive(Parser, Debug)]
pub struct ListFilesArgs {
    /// GitHub repository URL, optionally pinning a ref and subpath:
    /// https://github.com/OWNER/REPO[/tree/REF[/PATH]]
    pub repo_url: String,

    /// Output format (terminal or json).
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// `review` subcommand flags.
#[derive(Parser, Debug)]
pub struct ReviewArgs {
    // Input selection (exactly one)
    /// Local files to review.
    #[arg(long, value_delimiter = ',')]
    pub file: Vec<PathBuf>,

    /// GitHub repository URL to review files from.
    #[arg(long)]
    pub repo: Option<String>,

    /// Repository-relative file paths to review. Requires --repo;
    /// defaults to every reviewable file in the repository.
    #[arg(long, value_delimiter = ',')]
    pub paths: Vec<String>,

    // Model overrides
    /// Override the configured provider (gemini, anthropic, openai, openai-compatible).
    #[arg(long)]
    pub provider: Option<String>,

    /// Override the configured model name.
    #[arg(long)]
    pub model: Option<String>,

    // Output selection
    /// Output format (terminal or json).
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Rendering formats for command output.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// The renderer for this format.
    pub fn renderer(&self) -> Box<dyn OutputRenderer> {
        match self {
            OutputFormat::Terminal => Box::new(TerminalRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

impl ReviewArgs {
    /// Resolve the input flags into one [`InputMode`].
    pub fn validate_input(&self) -> Result<InputMode, String> {
        match (&self.repo, self.file.is_empty()) {
            (Some(_), false) => {
                Err("pass either --repo or --file, not both".to_string())
            }
            (Some(url), true) => Ok(InputMode::Github {
                repo_url: url.clone(),
                paths: self.paths.clone(),
            }),
            (None, false) => {
                if !self.paths.is_empty() {
                    return Err("--paths requires --repo".to_string());
                }
                Ok(InputMode::Snippet {
                    files: self.file.clone(),
                })
            }
            (None, true) => Err("an input is required: --repo or --file".to_string()),
        }
    }
}

// The resolved mode lives in models; re-exported here next to its producer.
pub use codesift::models::InputMode;
