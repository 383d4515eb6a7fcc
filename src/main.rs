//! codesift — AI-powered code review CLI.
//!
//! Binary entry point. Everything that can fail funnels into one
//! `anyhow` boundary that prints the error chain and exits non-zero.

mod cli;

use codesift::config;
use codesift::constants;
use codesift::env;
use codesift::github;
use codesift::models;
use codesift::output;
use codesift::providers;
use codesift::service;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, ListFilesArgs, ReviewArgs};
use config::Config;
use env::Env;
use github::GithubClient;
use models::{InputMode, ProviderName, SnippetFile};
use output::OutputRenderer;
use providers::rig::RigProvider;
use service::{AnalyzeRequest, AnalyzeResponse, ReviewService, ServiceError};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Review(args) => run_review(*args).await,
        Command::ListFiles(args) => run_list_files(args).await,
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        env!("CARGO_PKG_VERSION").green().bold()
    );
    Ok(())
}

/// List reviewable files in a GitHub repository.
async fn run_list_files(args: ListFilesArgs) -> Result<()> {
    let cwd = std::env::current_dir().ok();
    let config =
        Config::load(cwd.as_deref(), &Env::real()).context("failed to load configuration")?;
    let client = GithubClient::new(config.github.token.clone());
    let renderer = args.format.renderer();

    match service::list_files(&client, &args.repo_url).await {
        Ok(listing) => {
            print!("{}", renderer.render_listing(&listing));
            Ok(())
        }
        Err(err) => render_failure(renderer.as_ref(), &err),
    }
}

/// Run a code review over local files or a GitHub repository.
async fn run_review(args: ReviewArgs) -> Result<()> {
    let input_mode = args.validate_input().map_err(|e| anyhow::anyhow!("{e}"))?;

    let cwd = std::env::current_dir().ok();
    let mut config =
        Config::load(cwd.as_deref(), &Env::real()).context("failed to load configuration")?;
    apply_cli_overrides(&mut config, &args)?;

    let renderer = args.format.renderer();
    let client = GithubClient::new(config.github.token.clone());
    let provider = match RigProvider::new(config.provider.clone()) {
        Ok(p) => p,
        Err(e) => render_failure(renderer.as_ref(), &ServiceError::Model(e)),
    };

    match review_outcome(client, provider, &config, input_mode).await {
        Ok(response) => {
            print!("{}", renderer.render_review(&response));
            Ok(())
        }
        Err(err) => render_failure(renderer.as_ref(), &err),
    }
}

/// Drive one review request through the pipeline.
///
/// Every failure past argument parsing flows through [`ServiceError`] so
/// the selected renderer can attach the right status.
async fn review_outcome(
    client: GithubClient,
    provider: RigProvider,
    config: &Config,
    input_mode: InputMode,
) -> Result<AnalyzeResponse, ServiceError> {
    let request = match input_mode {
        InputMode::Snippet { files } => AnalyzeRequest::Snippet {
            files: read_snippet_files(&files).await?,
        },
        InputMode::Github { repo_url, paths } => {
            let reference = github::parse_repo_url(&repo_url)?;
            let paths = if paths.is_empty() {
                service::list_files(&client, &repo_url).await?.files
            } else {
                paths
            };
            AnalyzeRequest::Github { reference, paths }
        }
    };

    let service = ReviewService::new(
        Box::new(client),
        Box::new(provider),
        config.limits.clone(),
    );
    service.analyze(request).await
}

/// Read local files into review snippets.
async fn read_snippet_files(paths: &[PathBuf]) -> Result<Vec<SnippetFile>, ServiceError> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            ServiceError::InvalidInput(format!("failed to read {}: {e}", path.display()))
        })?;
        files.push(SnippetFile::new(path.display().to_string(), content));
    }
    Ok(files)
}

/// Apply CLI flag overrides on top of the layered config.
fn apply_cli_overrides(config: &mut Config, args: &ReviewArgs) -> Result<()> {
    if let Some(ref name) = args.provider {
        let parsed: ProviderName = name.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        if parsed != config.provider.name {
            config.provider.name = parsed;
            if args.model.is_none() {
                config.provider.model = parsed.default_model().to_string();
            }
        }
    }

    if let Some(ref model) = args.model {
        config.provider.model = model.clone();
    }

    Ok(())
}

/// Print the rendered error on stdout and exit non-zero.
///
/// JSON consumers read the structured error from stdout; the exit code
/// signals failure either way.
fn render_failure(renderer: &dyn OutputRenderer, err: &ServiceError) -> ! {
    print!("{}", renderer.render_error(err));
    process::exit(1);
}
