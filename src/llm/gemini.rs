//! Gemini `generateContent` API client.
//!
//! Thin HTTP wrapper for `/models/{model}:generateContent`. The API key
//! travels in the query string per the Gemini REST convention. Pure request
//! building and response parsing for testability.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::Timeouts;
use super::types::{ChatMessage, GenerationParams, LlmError, Role};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
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
        let body = build_request(params, system, messages);
        let url = format!("{}/models/{}:generateContent?key={}", self.base_url, model, self.api_key);

        let response = self
            .http
            .post(url)
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
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

fn build_request(params: GenerationParams, system: &str, messages: &[ChatMessage]) -> ApiRequest {
    let contents = messages
        .iter()
        .map(|message| Content {
            role: match message.role {
                Role::Model => "model",
                Role::User => "user",
            },
            parts: vec![Part { text: message.text.clone() }],
        })
        .collect();

    let system_instruction = if system.trim().is_empty() {
        None
    } else {
        Some(SystemInstruction { parts: vec![Part { text: system.to_string() }] })
    };

    ApiRequest {
        contents,
        system_instruction,
        generation_config: GenerationConfig {
            temperature: params.temperature,
            max_output_tokens: params.max_output_tokens,
        },
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Extract the first candidate's text. A response with no candidates is a
/// shape mismatch; a candidate with no text parts is an empty (but valid)
/// reply, left to the caller to interpret.
pub(crate) fn extract_text(json_text: &str) -> Result<String, LlmError> {
    let api: GenerateResponse = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let Some(candidate) = api.candidates.into_iter().next() else {
        return Err(LlmError::ApiParse("generateContent: missing candidates[0]".to_string()));
    };

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
    Ok(parts.into_iter().map(|p| p.text).collect())
}
