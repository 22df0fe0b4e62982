mod llm;
mod routes;
mod school;
mod services;
mod state;

use std::sync::Arc;

use llm::ChatModel;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "10000".into())
        .parse()
        .expect("invalid PORT");

    let school = school::SchoolInfo::from_env().expect("school info load failed");

    // Initialize the chat model client (non-fatal: live replies disabled if
    // provider config is missing — every request is answered from local rules).
    let llm = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "chat model client initialized");
            Some(Arc::new(client) as Arc<dyn ChatModel>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "chat model not configured — running in fallback-only mode");
            None
        }
    };

    let state = state::AppState::new(school, llm);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "linguawave listening");
    axum::serve(listener, app).await.expect("server failed");
}
