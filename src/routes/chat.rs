//! Chat endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::chat::{self, ReplyMode, Turn};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequestBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<Turn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseBody {
    pub text: String,
    pub mode: ReplyMode,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `POST /api/chat` — forward one message (plus recent history) to the chat
/// model; answer from local rules when the model is unavailable. An empty
/// message is a client error and never reaches the provider.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequestBody>,
) -> Result<Json<ChatResponseBody>, (StatusCode, Json<ErrorBody>)> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err((StatusCode::BAD_REQUEST, Json(ErrorBody { error: "message required".into() })));
    }

    let reply = chat::respond(&state, message, &body.history).await;
    Ok(Json(ChatResponseBody { text: reply.text, mode: reply.mode }))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
