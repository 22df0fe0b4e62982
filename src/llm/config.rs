//! Chat provider configuration parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    OpenRouter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl ChatConfig {
    /// Build typed provider config from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY` / `OPENROUTER_API_KEY` depending on the provider
    ///
    /// Optional:
    /// - `CHAT_PROVIDER`: `gemini` (default) or `openrouter`
    /// - `CHAT_MODEL`: provider default when absent
    /// - `CHAT_BASE_URL`: provider default API base URL
    /// - `CHAT_REQUEST_TIMEOUT_SECS`: default 20
    /// - `CHAT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error when `CHAT_PROVIDER` names an unknown provider or the
    /// provider's API key variable is not set.
    pub fn from_env() -> Result<Self, LlmError> {
        let provider = parse_provider(std::env::var("CHAT_PROVIDER").ok().as_deref())?;

        let key_var = api_key_var(provider);
        let api_key = std::env::var(key_var).map_err(|_| LlmError::MissingApiKey { var: key_var.into() })?;

        let model = std::env::var("CHAT_MODEL").unwrap_or_else(|_| default_model(provider).to_string());
        let base_url = std::env::var("CHAT_BASE_URL")
            .unwrap_or_else(|_| default_base_url(provider).to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = Timeouts {
            request_secs: env_parse_u64("CHAT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CHAT_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { provider, api_key, model, base_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

pub(crate) fn parse_provider(raw: Option<&str>) -> Result<ProviderKind, LlmError> {
    match raw.unwrap_or("gemini") {
        "gemini" => Ok(ProviderKind::Gemini),
        "openrouter" => Ok(ProviderKind::OpenRouter),
        other => Err(LlmError::ConfigParse(format!("unknown CHAT_PROVIDER: {other}"))),
    }
}

pub(crate) fn api_key_var(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::Gemini => "GEMINI_API_KEY",
        ProviderKind::OpenRouter => "OPENROUTER_API_KEY",
    }
}

pub(crate) fn default_model(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::Gemini => "gemini-2.5-flash",
        ProviderKind::OpenRouter => "openai/gpt-4o-mini",
    }
}

pub(crate) fn default_base_url(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::Gemini => DEFAULT_GEMINI_BASE_URL,
        ProviderKind::OpenRouter => DEFAULT_OPENROUTER_BASE_URL,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
