//! Repository URL parsing.
//!
//! Pure string parsing, no network access. Accepts GitHub web URLs of
//! the forms `https://github.com/{owner}/{repo}` and
//! `https://github.com/{owner}/{repo}/(tree|blob)/{ref}/{path...}`.

use crate::constants::GITHUB_HOST;
use crate::github::GithubError;
use crate::models::RepoReference;

/// Parse a GitHub web URL into a [`RepoReference`].
///
/// The host must be exactly `github.com`. Path segments beyond
/// owner/repo are only interpreted when the third segment is `tree` or
/// `blob`; anything else (e.g. `/pulls`, `/issues`) is ignored.
pub fn parse_repo_url(url: &str) -> Result<RepoReference, GithubError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| GithubError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let host = parsed.host_str().unwrap_or_default();
    if host != GITHUB_HOST {
        return Err(GithubError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported host '{host}': expected {GITHUB_HOST}"),
        });
    }

    let segments: Vec<&str> = parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() < 2 {
        return Err(GithubError::InvalidUrl {
            url: url.to_string(),
            reason: "expected at least an owner and a repository name".to_string(),
        });
    }

    let mut reference = RepoReference::new(segments[0], segments[1]);
    if segments.len() >= 4 && matches!(segments[2], "tree" | "blob") {
        reference.ref_ = Some(segments[3].to_string());
        if segments.len() > 4 {
            reference.path = Some(segments[4..].join("/"));
        }
    }

    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_bare_repo_url() {
        let r = parse_repo_url("https://github.com/rust-lang/cargo").unwrap();
        assert_eq!(r.owner, "rust-lang");
        assert_eq!(r.repo, "cargo");
        assert_eq!(r.ref_, None);
        assert_eq!(r.path, None);
    }

    #[test]
    fn parses_trailing_slash() {
        let r = parse_repo_url("https://github.com/rust-lang/cargo/").unwrap();
        assert_eq!(r.owner, "rust-lang");
        assert_eq!(r.repo, "cargo");
        assert_eq!(r.ref_, None);
    }

    #[test]
    fn parses_tree_url_with_ref_only() {
        let r = parse_repo_url("https://github.com/rust-lang/cargo/tree/v1.80.0").unwrap();
        assert_eq!(r.ref_.as_deref(), Some("v1.80.0"));
        assert_eq!(r.path, None);
    }

    #[test]
    fn parses_tree_url_with_nested_path() {
        let r = parse_repo_url("https://github.com/rust-lang/cargo/tree/master/src/bin").unwrap();
        assert_eq!(r.owner, "rust-lang");
        assert_eq!(r.repo, "cargo");
        assert_eq!(r.ref_.as_deref(), Some("master"));
        assert_eq!(r.path.as_deref(), Some("src/bin"));
    }

    #[test]
    fn parses_blob_url() {
        let r = parse_repo_url("https://github.com/tokio-rs/tokio/blob/master/tokio/src/lib.rs")
            .unwrap();
        assert_eq!(r.ref_.as_deref(), Some("master"));
        assert_eq!(r.path.as_deref(), Some("tokio/src/lib.rs"));
    }

    #[test]
    fn ignores_non_tree_extra_segments() {
        let r = parse_repo_url("https://github.com/rust-lang/cargo/pulls").unwrap();
        assert_eq!(r.owner, "rust-lang");
        assert_eq!(r.repo, "cargo");
        assert_eq!(r.ref_, None);
        assert_eq!(r.path, None);
    }

    #[test]
    fn tree_without_ref_segment_is_treated_as_bare() {
        let r = parse_repo_url("https://github.com/rust-lang/cargo/tree").unwrap();
        assert_eq!(r.ref_, None);
        assert_eq!(r.path, None);
    }

    #[test]
    fn rejects_non_github_host() {
        let err = parse_repo_url("https://gitlab.com/x/y").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("gitlab.com"), "got: {msg}");
        assert!(msg.contains("github.com"), "got: {msg}");
    }

    #[test]
    fn rejects_malformed_url() {
        assert!(parse_repo_url("not a url").is_err());
        assert!(parse_repo_url("github.com/owner/repo").is_err());
    }

    #[test]
    fn rejects_missing_repo_segment() {
        let err = parse_repo_url("https://github.com/just-an-owner").unwrap_err();
        assert!(err.to_string().contains("owner and a repository"));
    }

    #[test]
    fn host_comparison_is_case_normalised() {
        // URL parsing lowercases the host, so this is accepted.
        let r = parse_repo_url("https://GitHub.com/rust-lang/cargo").unwrap();
        assert_eq!(r.owner, "rust-lang");
    }
}
