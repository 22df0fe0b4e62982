//! Provider-neutral chat types and errors.
//!
//! Shared by the Gemini and OpenRouter clients. Providers accept the same
//! neutral message list and map it to their own wire schema.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by chat model client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the provider failed (network error, timeout).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MESSAGE TYPES
// =============================================================================

/// Which side of the conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single provider-neutral message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }
}

// =============================================================================
// GENERATION PARAMETERS
// =============================================================================

/// Fixed generation parameters sent with every outbound request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self { temperature: 0.4, max_output_tokens: 400 }
    }
}

// =============================================================================
// CHAT MODEL TRAIT
// =============================================================================

/// Provider-neutral async trait for one chat completion. Enables mocking in
/// tests.
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Send the system preamble plus conversation to the provider and return
    /// the generated text of the first candidate. The text may be empty; the
    /// caller decides what an empty reply means.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the provider returns a
    /// non-success status, or the response is malformed.
    async fn complete(&self, system: &str, messages: &[ChatMessage]) -> Result<String, LlmError>;
}
