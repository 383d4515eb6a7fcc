//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! remote endpoints, and size ceilings so a rename only requires changing
//! this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "codesift";

/// Local config filename (e.g. `.codesift.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".codesift.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "codesift";

// ── Remote endpoints ────────────────────────────────────────────────

/// Host accepted in repository URLs.
pub const GITHUB_HOST: &str = "github.com";

/// REST API base for repository metadata, trees, and contents.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Raw-content host used as the content-fetch fallback.
pub const GITHUB_RAW_URL: &str = "https://raw.githubusercontent.com";

/// User-Agent header sent with every GitHub request (the API rejects
/// requests without one).
pub const USER_AGENT: &str = concat!("codesift/", env!("CARGO_PKG_VERSION"));

// ── Size ceilings ───────────────────────────────────────────────────

/// Per-file byte ceiling before head/tail truncation kicks in.
pub const DEFAULT_MAX_FILE_BYTES: usize = 40_000;

/// Aggregate byte ceiling for a review bundle.
pub const DEFAULT_MAX_BUNDLE_BYTES: usize = 200_000;

/// Maximum number of files considered per review request.
pub const DEFAULT_MAX_FILES: usize = 50;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_PROVIDER: &str = "CODESIFT_PROVIDER";
pub const ENV_MODEL: &str = "CODESIFT_MODEL";
pub const ENV_API_KEY: &str = "CODESIFT_API_KEY";
pub const ENV_BASE_URL: &str = "CODESIFT_BASE_URL";
pub const ENV_GITHUB_TOKEN: &str = "CODESIFT_GITHUB_TOKEN";

/// Conventional fallback for the repository-service token.
pub const ENV_GITHUB_TOKEN_FALLBACK: &str = "GITHUB_TOKEN";
