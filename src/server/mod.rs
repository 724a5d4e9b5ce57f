pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::ErrorEnvelope;

use crate::gateway::Predictor;
use crate::{Result, config::Config};
use axum::http::{HeaderValue, header};
use axum::middleware::map_response;
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let predictor = Predictor::new(config.llm.clone(), config.prediction.clone())?;

    let app = router(AppState {
        predictor: Arc::new(predictor),
        max_specs_chars: config.prediction.max_specs_chars,
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", any(handlers::predict))
        .layer(map_response(apply_default_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fixed header set carried by every response, success or failure.
async fn apply_default_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
