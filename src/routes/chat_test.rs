use super::*;
use crate::state::test_helpers;

fn body(message: &str, history: Vec<Turn>) -> ChatRequestBody {
    ChatRequestBody { message: message.into(), history }
}

#[tokio::test]
async fn empty_message_is_a_client_error() {
    let state = test_helpers::test_app_state();
    let result = chat(State(state), Json(body("", vec![]))).await;
    let (status, Json(err)) = result.err().expect("empty message must be rejected");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err.error, "message required");
}

#[tokio::test]
async fn whitespace_message_is_a_client_error() {
    let state = test_helpers::test_app_state();
    let result = chat(State(state), Json(body("   \n", vec![]))).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn unconfigured_model_yields_fallback_reply_not_an_error() {
    let state = test_helpers::test_app_state();
    let Json(reply) = chat(State(state.clone()), Json(body("сколько стоит английский?", vec![])))
        .await
        .expect("fallback reply expected");
    assert_eq!(reply.mode, ReplyMode::Fallback);
    assert_eq!(reply.text, state.school.render_price_list());
}

#[tokio::test]
async fn reply_serializes_mode_as_lowercase_string() {
    let state = test_helpers::test_app_state();
    let Json(reply) = chat(State(state), Json(body("привет", vec![]))).await.unwrap();
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["mode"], "fallback");
    assert!(json["text"].is_string());
}

#[tokio::test]
async fn history_is_accepted_alongside_the_message() {
    let state = test_helpers::test_app_state();
    let history = vec![
        Turn { role: "user".into(), text: "привет".into() },
        Turn { role: "model".into(), text: "здравствуйте".into() },
    ];
    let result = chat(State(state), Json(body("когда занятия", history))).await;
    assert!(result.is_ok());
}

#[test]
fn request_body_defaults_missing_fields() {
    let parsed: ChatRequestBody = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
    assert_eq!(parsed.message, "hi");
    assert!(parsed.history.is_empty());

    let parsed: ChatRequestBody = serde_json::from_str("{}").unwrap();
    assert!(parsed.message.is_empty());
}
