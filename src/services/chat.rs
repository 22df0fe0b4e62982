//! Chat service — history adaptation, provider call, fallback selection.
//!
//! DESIGN
//! ======
//! One operation: [`respond`]. It adapts the client-supplied history into the
//! outbound message list, issues a single provider call, and degrades to the
//! keyword fallback on any failure — missing credentials, non-2xx status,
//! timeout, malformed payload. The caller always receives a usable reply;
//! provider trouble is logged, never surfaced.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::fallback;
use crate::llm::types::{ChatMessage, LlmError, Role};
use crate::school::SchoolInfo;
use crate::state::AppState;

/// Only this many most-recent turns are forwarded to the provider.
const HISTORY_LIMIT: usize = 10;

/// Placeholder when the provider call succeeds but returns no text.
const NO_ANSWER_TEXT: &str = "Нет ответа.";

// =============================================================================
// TYPES
// =============================================================================

/// A single prior conversation turn as supplied by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub text: String,
}

/// Where the reply text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyMode {
    Live,
    Fallback,
}

/// Reply returned to the HTTP layer. Always well-formed; `mode` tells the
/// client whether the text came from the model or from local rules.
#[derive(Debug)]
pub struct ChatReply {
    pub text: String,
    pub mode: ReplyMode,
}

#[derive(Debug, thiserror::Error)]
enum ChatError {
    #[error("chat model not configured")]
    NotConfigured,

    #[error("chat model error: {0}")]
    Model(#[from] LlmError),
}

// =============================================================================
// RESPONDER
// =============================================================================

/// Answer one chat message. Never fails: any provider problem degrades to a
/// deterministic fallback answer.
pub async fn respond(state: &AppState, message: &str, history: &[Turn]) -> ChatReply {
    match live_reply(state, message, history).await {
        Ok(text) => {
            debug!(chars = text.len(), "chat: live reply");
            let text = if text.trim().is_empty() { NO_ANSWER_TEXT.to_string() } else { text };
            ChatReply { text, mode: ReplyMode::Live }
        }
        Err(e) => {
            warn!(error = %e, "chat: provider unavailable — answering from local rules");
            ChatReply { text: fallback::answer(&state.school, message), mode: ReplyMode::Fallback }
        }
    }
}

async fn live_reply(state: &AppState, message: &str, history: &[Turn]) -> Result<String, ChatError> {
    let llm = state.llm.as_ref().ok_or(ChatError::NotConfigured)?;
    let system = build_system_prompt(&state.school);
    let messages = build_outbound_messages(history, message);
    Ok(llm.complete(&system, &messages).await?)
}

// =============================================================================
// HISTORY ADAPTER
// =============================================================================

/// Map client-supplied turns to the outbound message list: the last
/// `HISTORY_LIMIT` turns in order, empty-text turns dropped, and the current
/// message appended as the final user entry.
pub(crate) fn build_outbound_messages(history: &[Turn], message: &str) -> Vec<ChatMessage> {
    let start = history.len().saturating_sub(HISTORY_LIMIT);
    let mut out = Vec::with_capacity(history.len() - start + 1);

    for turn in &history[start..] {
        if turn.text.trim().is_empty() {
            continue;
        }
        let role = if turn.role == "model" { Role::Model } else { Role::User };
        out.push(ChatMessage { role, text: turn.text.clone() });
    }

    out.push(ChatMessage::user(message));
    out
}

// =============================================================================
// SYSTEM PROMPT
// =============================================================================

pub(crate) fn build_system_prompt(school: &SchoolInfo) -> String {
    format!(
        "Ты — ИИ-ассистент школы иностранных языков {}. \
         Отвечай кратко и по делу на русском. \
         Помогай выбрать курс и объясняй обучение.\n\n{}",
        school.name,
        school.render_context(),
    )
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
