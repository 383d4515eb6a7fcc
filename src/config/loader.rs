//! Config types and the layered loading logic.
//!
//! Sources override each other in this order, strongest first:
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.codesift.toml` in the working directory
//! 4. `~/.config/codesift/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{DEFAULT_MAX_BUNDLE_BYTES, DEFAULT_MAX_FILE_BYTES, DEFAULT_MAX_FILES};
use crate::env::Env;
use crate::models::ProviderName;

/// Failures while reading or parsing config files.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub github: GithubConfig,
    pub limits: LimitsConfig,
}

/// Which LLM backend to call and how to authenticate against it.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub name: ProviderName,
    pub model: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        let name = ProviderName::default();
        Self {
            name,
            model: name.default_model().to_string(),
            base_url: None,
            api_key: None,
        }
    }
}

/// Repository service configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Bearer token for the GitHub API. Optional: without it requests
    /// run unauthenticated under the stricter public rate limits.
    pub token: Option<String>,
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Size ceilings for the bounding pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Per-file byte ceiling before head/tail elision.
    pub max_file_bytes: usize,
    /// Aggregate byte ceiling for the bundle.
    pub max_bundle_bytes: usize,
    /// Maximum number of files considered per request.
    pub max_files: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_bundle_bytes: DEFAULT_MAX_BUNDLE_BYTES,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl Config {
    /// Load and layer configuration from every source.
    ///
    /// Global config first, then the working-directory file, then
    /// environment variables on top.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4, per-user defaults
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3, project-local file
        if let Some(dir) = local_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2, environment
        config.apply_env_vars(env);

        // A provider switch without an explicit model gets that
        // provider's own default model, not the global default's.
        if config.provider.name != ProviderName::default()
            && config.provider.model == ProviderConfig::default().model
        {
            config.provider.model = config.provider.name.default_model().to_string();
        }

        Ok(config)
    }

    /// Parse one TOML config file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Path of the per-user config file, if a config dir exists.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Fold `other` into `self`, keeping `other` wherever it was explicitly set.
    fn merge(&mut self, other: Config) {
        // Provider section
        let default_provider = ProviderConfig::default();
        if other.provider.name != default_provider.name {
            self.provider.name = other.provider.name;
        }
        if other.provider.model != default_provider.model {
            self.provider.model = other.provider.model;
        }
        if other.provider.base_url.is_some() {
            self.provider.base_url = other.provider.base_url;
        }
        if other.provider.api_key.is_some() {
            self.provider.api_key = other.provider.api_key;
        }

        // GitHub section
        if other.github.token.is_some() {
            self.github.token = other.github.token;
        }

        // Limits section
        let default_limits = LimitsConfig::default();
        if other.limits.max_file_bytes != default_limits.max_file_bytes {
            self.limits.max_file_bytes = other.limits.max_file_bytes;
        }
        if other.limits.max_bundle_bytes != default_limits.max_bundle_bytes {
            self.limits.max_bundle_bytes = other.limits.max_bundle_bytes;
        }
        if other.limits.max_files != default_limits.max_files {
            self.limits.max_files = other.limits.max_files;
        }
    }

    /// Overlay values taken from the environment.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_PROVIDER) {
            if let Ok(name) = val.parse::<ProviderName>() {
                self.provider.name = name;
            } else {
                eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    crate::constants::ENV_PROVIDER
                );
            }
        }
        if let Ok(val) = env.var(crate::constants::ENV_MODEL) {
            self.provider.model = val;
        }
        if let Ok(val) = env.var(crate::constants::ENV_BASE_URL) {
            self.provider.base_url = Some(val);
        }

        // The generic key var wins over the provider-specific one
        let api_key = env
            .var(crate::constants::ENV_API_KEY)
            .or_else(|_| env.var(self.provider.name.api_key_env_var()))
            .ok();
        if api_key.is_some() {
            self.provider.api_key = api_key;
        }

        // GitHub token, with the conventional fallback
        let token = env
            .var(crate::constants::ENV_GITHUB_TOKEN)
            .or_else(|_| env.var(crate::constants::ENV_GITHUB_TOKEN_FALLBACK))
            .ok();
        if token.is_some() {
            self.github.token = token;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let config = Config::default();
        assert_eq!(config.provider.name, ProviderName::Gemini);
        assert_eq!(config.provider.model, "gemini-2.5-flash");
        assert_eq!(config.github.token, None);
        assert_eq!(config.limits.max_file_bytes, 40_000);
        assert_eq!(config.limits.max_bundle_bytes, 200_000);
        assert_eq!(config.limits.max_files, 50);
    }

    #[test]
    fn toml_sections_deserialize() {
        let toml_str = r#"
[provider]
name = "openai"
model = "gpt-4o"

[github]
token = "ghp_test"

[limits]
max_file_bytes = 10000
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.name, ProviderName::OpenAI);
        assert_eq!(config.provider.model, "gpt-4o");
        assert_eq!(config.github.token, Some("ghp_test".to_string()));
        assert_eq!(config.limits.max_file_bytes, 10_000);
        // Unset limits keep their defaults
        assert_eq!(config.limits.max_bundle_bytes, 200_000);
    }

    #[test]
    fn merge_prefers_explicit_values() {
        let mut base = Config::default();
        let mut other = Config::default();

        other.provider.name = ProviderName::OpenAI;
        other.provider.model = "gpt-4o".to_string();
        other.provider.base_url = Some("https://proxy.example/v1".to_string());
        other.provider.api_key = Some("sk-test".to_string());
        other.github.token = Some("ghp_x".to_string());
        other.limits.max_file_bytes = 1_000;
        other.limits.max_bundle_bytes = 5_000;
        other.limits.max_files = 10;

        base.merge(other);

        assert_eq!(base.provider.name, ProviderName::OpenAI);
        assert_eq!(base.provider.model, "gpt-4o");
        assert_eq!(
            base.provider.base_url,
            Some("https://proxy.example/v1".to_string())
        );
        assert_eq!(base.provider.api_key, Some("sk-test".to_string()));
        assert_eq!(base.github.token, Some("ghp_x".to_string()));
        assert_eq!(base.limits.max_file_bytes, 1_000);
        assert_eq!(base.limits.max_bundle_bytes, 5_000);
        assert_eq!(base.limits.max_files, 10);
    }

    #[test]
    fn merge_leaves_unset_fields_alone() {
        let mut base = Config::default();
        base.provider.name = ProviderName::OpenAI;
        base.provider.model = "gpt-4o".to_string();
        base.limits.max_files = 25;

        let other = Config::default();
        base.merge(other);

        assert_eq!(base.provider.name, ProviderName::OpenAI);
        assert_eq!(base.provider.model, "gpt-4o");
        assert_eq!(base.limits.max_files, 25);
    }

    #[test]
    fn load_file_parses_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.toml");
        std::fs::write(
            &path,
            r#"
[provider]
name = "openai"
model = "gpt-4o"
"#,
        )
        .unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.provider.name, ProviderName::OpenAI);
        assert_eq!(config.provider.model, "gpt-4o");
    }

    #[test]
    fn load_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_reports_missing_file() {
        let result = Config::load_file(Path::new("/tmp/codesift_not_exist_config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn local_config_overrides_defaults() {
        let env = Env::mock(Vec::<(&str, &str)>::new());

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".codesift.toml"),
            r#"
[provider]
name = "openai"
model = "gpt-4o"
"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.provider.name, ProviderName::OpenAI);
        assert_eq!(config.provider.model, "gpt-4o");
    }

    #[test]
    fn load_with_no_files_yields_defaults() {
        let env = Env::mock(Vec::<(&str, &str)>::new());

        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.provider.name, ProviderName::Gemini);
    }

    #[test]
    fn global_path_mentions_the_app() {
        // None is possible on hosts without a config dir
        if let Some(p) = Config::global_config_path() {
            assert!(p.to_str().unwrap().contains("codesift"));
        }
    }

    #[test]
    fn env_overrides_provider_and_key() {
        let env = Env::mock([
            ("CODESIFT_PROVIDER", "openai"),
            ("CODESIFT_API_KEY", "sk-env-test"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.provider.name, ProviderName::OpenAI);
        assert_eq!(config.provider.api_key, Some("sk-env-test".to_string()));
    }

    #[test]
    fn env_overrides_model_and_base_url() {
        let env = Env::mock([
            ("CODESIFT_MODEL", "gemini-2.5-pro"),
            ("CODESIFT_BASE_URL", "https://proxy.example/v1"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.provider.model, "gemini-2.5-pro");
        assert_eq!(
            config.provider.base_url,
            Some("https://proxy.example/v1".to_string())
        );
    }

    #[test]
    fn invalid_provider_env_is_ignored() {
        let env = Env::mock([("CODESIFT_PROVIDER", "not-a-provider")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.provider.name, ProviderName::Gemini);
    }

    #[test]
    fn provider_specific_key_var_is_honored() {
        let env = Env::mock([("GEMINI_API_KEY", "gm-test")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.provider.api_key, Some("gm-test".to_string()));
    }

    #[test]
    fn github_token_env_fallback_order() {
        let env = Env::mock([("GITHUB_TOKEN", "ghp_fallback")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.github.token, Some("ghp_fallback".to_string()));

        // The app-specific variable wins over the conventional one.
        let env = Env::mock([
            ("CODESIFT_GITHUB_TOKEN", "ghp_specific"),
            ("GITHUB_TOKEN", "ghp_fallback"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.github.token, Some("ghp_specific".to_string()));
    }

    #[test]
    fn provider_switch_resolves_provider_default_model() {
        let env = Env::mock([("CODESIFT_PROVIDER", "anthropic")]);
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.provider.name, ProviderName::Anthropic);
        assert_eq!(config.provider.model, "claude-sonnet-4-5");
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let mut config = Config::default();
        config.provider.api_key = Some("sk-secret".to_string());
        config.github.token = Some("ghp_secret".to_string());
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
