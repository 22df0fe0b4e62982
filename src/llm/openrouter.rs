//! OpenAI-compatible chat completions client (OpenRouter).
//!
//! Thin HTTP wrapper for `/chat/completions` with bearer-header auth. Works
//! against any OpenAI-compatible endpoint via `CHAT_BASE_URL`. Pure message
//! building and response parsing for testability.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::Timeouts;
use super::types::{ChatMessage, GenerationParams, LlmError, Role};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, base_url: String, timeouts: Timeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn complete(
        &self,
        model: &str,
        params: GenerationParams,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<String, LlmError> {
        let body = ApiRequest {
            model,
            temperature: params.temperature,
            max_tokens: params.max_output_tokens,
            messages: build_messages(system, messages),
        };
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        extract_text(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<WireMessage>,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

fn build_messages(system: &str, messages: &[ChatMessage]) -> Vec<WireMessage> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.trim().is_empty() {
        out.push(WireMessage { role: "system", content: system.to_string() });
    }
    for message in messages {
        out.push(WireMessage {
            role: match message.role {
                Role::Model => "assistant",
                Role::User => "user",
            },
            content: message.text.clone(),
        });
    }
    out
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

#[derive(Deserialize)]
struct Completion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Deserialize, Default)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Extract the first choice's message content. A response with no choices is
/// a shape mismatch; a null/absent content field is an empty (but valid)
/// reply, left to the caller to interpret.
pub(crate) fn extract_text(json_text: &str) -> Result<String, LlmError> {
    let api: Completion = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let Some(choice) = api.choices.into_iter().next() else {
        return Err(LlmError::ApiParse("chat_completions: missing choices[0]".to_string()));
    };

    Ok(choice.message.content.unwrap_or_default())
}
