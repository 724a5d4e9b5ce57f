use super::types::ErrorEnvelope;
use crate::gateway::{
    Predictor, PredictionResult, RequestEvent, RequestLifecycle, parse_prediction_request,
};
use crate::{Error, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
    pub max_specs_chars: usize,
}

/// Single entry point for `/predict`. Method policy lives here rather than
/// in the router so non-POST methods get the documented envelope instead of
/// a bare 405.
pub async fn predict(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => {
            let request_id = Uuid::new_v4();
            info!(%request_id, body_len = body.len(), "Received prediction request");

            match run_pipeline(&state, &body).await {
                Ok(result) => {
                    info!(%request_id, product = %result.product, "Prediction request completed");
                    (StatusCode::OK, Json(result)).into_response()
                }
                Err(e) => {
                    error!(%request_id, code = e.code(), "Prediction request failed: {}", e);
                    error_response(&e)
                }
            }
        }
        _ => error_response(&Error::MethodNotAllowed),
    }
}

async fn run_pipeline(state: &AppState, body: &[u8]) -> Result<PredictionResult> {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.advance(RequestEvent::RouteMatched)?;

    let outcome = async {
        let request = parse_prediction_request(body, state.max_specs_chars)?;
        info!(specs_chars = request.specs.chars().count(), "Input validated");
        lifecycle.advance(RequestEvent::InputAccepted)?;

        state.predictor.predict(&request, &mut lifecycle).await
    }
    .await;

    match &outcome {
        Ok(_) => lifecycle.advance(RequestEvent::ResponseSent)?,
        Err(e) => lifecycle.fail(e.code()),
    }

    outcome
}

fn error_response(err: &Error) -> Response {
    (err.status(), Json(ErrorEnvelope::from(err))).into_response()
}
