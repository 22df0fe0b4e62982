use super::*;
use crate::llm::ChatModel;
use crate::state::test_helpers;
use std::sync::{Arc, Mutex};

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    replies: Mutex<Vec<Result<String, LlmError>>>,
}

impl MockLlm {
    fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self { replies: Mutex::new(vec![Ok(text.to_string())]) })
    }

    fn err(error: LlmError) -> Arc<Self> {
        Arc::new(Self { replies: Mutex::new(vec![Err(error)]) })
    }
}

#[async_trait::async_trait]
impl ChatModel for MockLlm {
    async fn complete(&self, _system: &str, _messages: &[ChatMessage]) -> Result<String, LlmError> {
        self.replies.lock().unwrap().remove(0)
    }
}

fn turn(role: &str, text: &str) -> Turn {
    Turn { role: role.into(), text: text.into() }
}

// =========================================================================
// build_outbound_messages
// =========================================================================

#[test]
fn long_history_is_capped_to_last_ten() {
    let history: Vec<Turn> = (0..15)
        .map(|i| turn(if i % 2 == 0 { "user" } else { "model" }, &format!("turn {i}")))
        .collect();

    let messages = build_outbound_messages(&history, "новый вопрос");

    assert_eq!(messages.len(), 11);
    assert_eq!(messages[0].text, "turn 5");
    assert_eq!(messages[9].text, "turn 14");
    assert_eq!(messages[10], ChatMessage::user("новый вопрос"));
}

#[test]
fn history_order_is_preserved() {
    let history = vec![turn("user", "a"), turn("model", "b"), turn("user", "c")];
    let messages = build_outbound_messages(&history, "d");
    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["a", "b", "c", "d"]);
}

#[test]
fn empty_and_whitespace_turns_are_dropped() {
    let history = vec![turn("user", "привет"), turn("model", ""), turn("user", "   ")];
    let messages = build_outbound_messages(&history, "вопрос");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "привет");
    assert_eq!(messages[1].text, "вопрос");
}

#[test]
fn model_role_maps_to_model_side_everything_else_to_user() {
    let history = vec![turn("model", "ответ"), turn("user", "вопрос"), turn("assistant", "чужой тег")];
    let messages = build_outbound_messages(&history, "x");
    assert_eq!(messages[0].role, Role::Model);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[2].role, Role::User);
}

#[test]
fn current_message_is_always_last_and_user_tagged() {
    let history: Vec<Turn> = (0..40).map(|i| turn("user", &format!("t{i}"))).collect();
    let messages = build_outbound_messages(&history, "финальный вопрос");
    let last = messages.last().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.text, "финальный вопрос");
}

#[test]
fn empty_history_forwards_only_the_message() {
    let messages = build_outbound_messages(&[], "один вопрос");
    assert_eq!(messages, vec![ChatMessage::user("один вопрос")]);
}

// =========================================================================
// respond
// =========================================================================

#[tokio::test]
async fn live_reply_keeps_model_text() {
    let state = test_helpers::test_app_state_with_llm(MockLlm::ok("Добро пожаловать!"));
    let reply = respond(&state, "привет", &[]).await;
    assert_eq!(reply.mode, ReplyMode::Live);
    assert_eq!(reply.text, "Добро пожаловать!");
}

#[tokio::test]
async fn empty_model_text_becomes_placeholder_but_stays_live() {
    let state = test_helpers::test_app_state_with_llm(MockLlm::ok("  "));
    let reply = respond(&state, "привет", &[]).await;
    assert_eq!(reply.mode, ReplyMode::Live);
    assert_eq!(reply.text, NO_ANSWER_TEXT);
}

#[tokio::test]
async fn provider_error_degrades_to_fallback() {
    let state = test_helpers::test_app_state_with_llm(MockLlm::err(LlmError::ApiResponse {
        status: 503,
        body: "overloaded".into(),
    }));
    let reply = respond(&state, "сколько стоит английский?", &[]).await;
    assert_eq!(reply.mode, ReplyMode::Fallback);
    assert_eq!(reply.text, state.school.render_price_list());
}

#[tokio::test]
async fn parse_error_degrades_to_fallback() {
    let state = test_helpers::test_app_state_with_llm(MockLlm::err(LlmError::ApiParse("bad shape".into())));
    let reply = respond(&state, "когда занятия", &[]).await;
    assert_eq!(reply.mode, ReplyMode::Fallback);
    assert_eq!(reply.text, state.school.render_schedule());
}

#[tokio::test]
async fn missing_client_degrades_to_fallback() {
    let state = test_helpers::test_app_state();
    let reply = respond(&state, "расскажи анекдот", &[]).await;
    assert_eq!(reply.mode, ReplyMode::Fallback);
    assert!(reply.text.contains("язык и уровень"));
}

#[tokio::test]
async fn system_prompt_and_history_reach_the_provider() {
    struct CaptureLlm {
        captured: Mutex<Vec<(String, Vec<ChatMessage>)>>,
    }

    #[async_trait::async_trait]
    impl ChatModel for CaptureLlm {
        async fn complete(&self, system: &str, messages: &[ChatMessage]) -> Result<String, LlmError> {
            self.captured
                .lock()
                .unwrap()
                .push((system.to_string(), messages.to_vec()));
            Ok("ok".into())
        }
    }

    let capture = Arc::new(CaptureLlm { captured: Mutex::new(Vec::new()) });
    let state = test_helpers::test_app_state_with_llm(capture.clone());

    let history = vec![turn("user", "привет"), turn("model", "здравствуйте")];
    let _ = respond(&state, "сколько стоит?", &history).await;

    let captured = capture.captured.lock().unwrap();
    let (system, messages) = &captured[0];
    assert!(system.contains("LinguaWave"));
    assert!(system.contains("Расписание:"));
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2], ChatMessage::user("сколько стоит?"));
}

// =========================================================================
// build_system_prompt
// =========================================================================

#[test]
fn system_prompt_names_school_and_embeds_context() {
    let school = crate::school::SchoolInfo::builtin();
    let prompt = build_system_prompt(&school);
    assert!(prompt.contains("LinguaWave"));
    assert!(prompt.contains("на русском"));
    assert!(prompt.contains("Курсы:"));
    assert!(prompt.contains("35000"));
}
