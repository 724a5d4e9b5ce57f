use super::mocks::MockCompletionClient;
use axum::Router;
use pricelens::config::{LlmConfig, PredictionConfig};
use pricelens::gateway::Predictor;
use pricelens::server::{self, AppState};
use std::sync::Arc;

/// Router over a scripted upstream, as served in production.
pub fn build_test_app(client: MockCompletionClient) -> Router {
    let settings = PredictionConfig::default();
    let max_specs_chars = settings.max_specs_chars;
    let predictor = Predictor::with_client(Box::new(client), settings);

    server::router(AppState {
        predictor: Arc::new(predictor),
        max_specs_chars,
    })
}

/// LLM config pointing at an unroutable endpoint, for fail-fast tests.
pub fn unreachable_llm_config(api_key: &str) -> LlmConfig {
    LlmConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: api_key.to_string(),
        model: "gemini-2.0-flash".to_string(),
    }
}

/// Collect a response body as JSON.
pub async fn body_json(body: axum::body::Body) -> serde_json::Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
