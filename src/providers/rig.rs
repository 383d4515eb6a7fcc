//! rig-core bindings for the review pipeline.
//!
//! One [`RigProvider`] wraps whichever rig-core client the configured
//! provider name selects: Gemini, Anthropic, OpenAI, or any
//! OpenAI-compatible API reachable through a custom base URL.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers;

use crate::config::ProviderConfig;
use crate::models::{ProviderName, ReviewResult};

use super::{ProviderError, ReviewProvider};

/// Maximum tokens per completion response.
///
/// Thinking models spend part of this budget on internal reasoning, so
/// the ceiling sits well above the size of a typical review payload.
const MAX_TOKENS: u64 = 65536;

/// Build an agent from a rig-core client and send the review prompt.
///
/// `max_tokens` is set explicitly on every provider. Some of them
/// (Gemini in particular) otherwise default to a low limit that cuts
/// responses off mid-JSON.
macro_rules! prompt_model {
    ($client:expr, $model:expr, $system:expr, $user:expr, $label:expr) => {{
        let agent = $client
            .agent($model)
            .preamble($system)
            .max_tokens(MAX_TOKENS)
            .temperature(0.0)
            .output_schema::<ReviewResult>()
            .build();
        agent
            .prompt($user)
            .await
            .map_err(|e| ProviderError::ApiError(format!("{} request failed: {e}", $label)))
    }};
}

/// Construct a rig-core client for providers with a plain
/// `Client::new(api_key)` constructor.
macro_rules! client_from_key {
    ($provider_mod:path, $api_key:expr, $label:expr) => {{
        <$provider_mod>::new($api_key).map_err(|e| {
            ProviderError::ApiError(format!("failed to build {} client: {e}", $label))
        })
    }};
}

/// Review provider backed by rig-core clients.
///
/// The provider name in config selects which rig-core client to use.
/// Clients are constructed per completion call; the instance holds only
/// configuration, never shared connection state.
pub struct RigProvider {
    config: ProviderConfig,
}

impl RigProvider {
    /// Create a provider from resolved configuration.
    ///
    /// A missing API key is a fatal configuration error at this point.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_none() {
            return Err(ProviderError::NotConfigured(format!(
                "missing API key for provider '{}': set {} or the provider-specific env var",
                config.name,
                crate::constants::ENV_API_KEY
            )));
        }
        Ok(Self { config })
    }

    /// Build an OpenAI-style client, honoring a configured base URL.
    fn build_openai_client(
        &self,
        api_key: &str,
    ) -> Result<providers::openai::CompletionsClient, ProviderError> {
        let mut builder = providers::openai::CompletionsClient::builder().api_key(api_key);
        if let Some(ref base_url) = self.config.base_url {
            builder = builder.base_url(base_url);
        }
        builder
            .build()
            .map_err(|e| ProviderError::ApiError(format!("failed to build OpenAI client: {e}")))
    }

    fn build_anthropic_client(
        &self,
        api_key: &str,
    ) -> Result<providers::anthropic::Client, ProviderError> {
        providers::anthropic::Client::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| ProviderError::ApiError(format!("failed to build Anthropic client: {e}")))
    }

    /// OpenAI-compatible providers must carry a `base_url`.
    fn require_base_url(&self) -> Result<&str, ProviderError> {
        self.config.base_url.as_deref().ok_or_else(|| {
            ProviderError::NotConfigured(
                "base_url must be configured for the openai-compatible provider".to_string(),
            )
        })
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::NotConfigured("missing API key".to_string()))
    }

    /// Run one completion through rig-core and return the raw response text.
    async fn call_rig(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        let api_key = self.api_key()?;

        match self.config.name {
            ProviderName::Gemini => {
                let client = client_from_key!(providers::gemini::Client, api_key, "Gemini")?;
                prompt_model!(client, model, system_prompt, user_prompt, "Gemini")
            }
            ProviderName::Anthropic => {
                let client = self.build_anthropic_client(api_key)?;
                prompt_model!(client, model, system_prompt, user_prompt, "Anthropic")
            }
            ProviderName::OpenAI => {
                let client = self.build_openai_client(api_key)?;
                prompt_model!(client, model, system_prompt, user_prompt, "OpenAI")
            }
            ProviderName::OpenAICompatible => {
                self.require_base_url()?;
                let client = self.build_openai_client(api_key)?;
                prompt_model!(
                    client,
                    model,
                    system_prompt,
                    user_prompt,
                    "OpenAI-compatible"
                )
            }
        }
    }
}

#[async_trait]
impl ReviewProvider for RigProvider {
    async fn review(&self, preamble: &str, prompt: &str) -> Result<String, ProviderError> {
        self.call_rig(&self.config.model, preamble, prompt).await
    }
}
