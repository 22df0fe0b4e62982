//! LLM — chat completion provider adapter.
//!
//! DESIGN
//! ======
//! The `LlmClient` struct dispatches to Gemini or an OpenAI-compatible
//! endpoint (OpenRouter) based on `CHAT_PROVIDER`. Model name and generation
//! parameters are fixed at construction; request handling stays
//! provider-agnostic behind the [`ChatModel`] trait.

pub mod config;
pub mod gemini;
pub mod openrouter;
pub mod types;

use config::{ChatConfig, ProviderKind};
pub use types::ChatModel;
use types::{ChatMessage, GenerationParams, LlmError};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete chat model client that dispatches to either Gemini or OpenRouter.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: Provider,
    model: String,
    params: GenerationParams,
}

enum Provider {
    Gemini(gemini::GeminiClient),
    OpenRouter(openrouter::OpenRouterClient),
}

impl LlmClient {
    /// Build a chat model client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider API key is missing, the provider name
    /// is unknown, or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = ChatConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build a chat model client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: ChatConfig) -> Result<Self, LlmError> {
        let model = config.model.clone();
        let inner = match config.provider {
            ProviderKind::Gemini => {
                Provider::Gemini(gemini::GeminiClient::new(config.api_key, config.base_url, config.timeouts)?)
            }
            ProviderKind::OpenRouter => Provider::OpenRouter(openrouter::OpenRouterClient::new(
                config.api_key,
                config.base_url,
                config.timeouts,
            )?),
        };
        Ok(Self { inner, model, params: GenerationParams::default() })
    }

    /// Return the configured model name (e.g. `"gemini-2.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl ChatModel for LlmClient {
    async fn complete(&self, system: &str, messages: &[ChatMessage]) -> Result<String, LlmError> {
        match &self.inner {
            Provider::Gemini(c) => c.complete(&self.model, self.params, system, messages).await,
            Provider::OpenRouter(c) => c.complete(&self.model, self.params, system, messages).await,
        }
    }
}
