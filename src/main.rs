use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rescata::config::AppConfig;
use rescata::llm::config::LlmConfig;
use rescata::llm::{EnvCredentials, LlmClient};
use rescata::{routes, state};

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().expect("invalid server configuration");
    let llm_config = LlmConfig::from_env().expect("invalid LLM configuration");

    // The key is read per request, so a missing key only degrades the assistant.
    let credentials = EnvCredentials::new(llm_config.api_key_env.clone());
    if std::env::var(credentials.var()).is_err() {
        tracing::warn!(var = credentials.var(), "API key not set, assistant will report a missing key");
    }

    let llm = LlmClient::from_config(llm_config).expect("LLM client init failed");
    tracing::info!(provider = ?llm.provider(), model = llm.model(), "LLM client initialized");

    let state = state::AppState::new(Arc::new(llm), Arc::new(credentials));
    let app = routes::app(state);

    let addr = config.socket_addr().expect("invalid bind address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "rescata listening");
    axum::serve(listener, app).await.expect("server failed");
}
