//! Configuration layer.
//!
//! Resolves `.codesift.toml` files, environment variables, and CLI
//! flags into one [`Config`] with a fixed precedence.

pub mod loader;

pub use loader::{Config, GithubConfig, LimitsConfig, ProviderConfig};
