//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API surface is two routes: the chat endpoint and a liveness probe.
//! The marketing site itself is pre-built static files served verbatim from
//! `WEBSITE_DIR` as the router fallback — this service never renders HTML.

pub mod chat;

use std::path::PathBuf;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// API routes + static marketing site fallback.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let website = ServeDir::new(website_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
        .fallback_service(website)
}

/// Resolve the path to the static marketing site directory.
fn website_dir() -> PathBuf {
    std::env::var("WEBSITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("website"))
}

/// `GET /health` — fixed 200 body for the hosting platform's liveness probe.
async fn health() -> &'static str {
    "OK"
}
