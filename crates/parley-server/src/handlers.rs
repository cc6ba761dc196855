//! Route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use parley_common::new_correlation_id;
use parley_skill::{RequestEnvelope, ResponseEnvelope};
use serde::{Deserialize, Serialize};
use tracing::{info_span, warn, Instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// POST {server.path}: run one platform request through the skill.
///
/// The body is decoded by hand so malformed envelopes get the JSON error
/// body rather than axum's plain-text rejection.
pub async fn skill(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let envelope: RequestEnvelope = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, bytes = body.len(), "Rejected undecodable envelope");
        ApiError::BadRequest(format!("invalid request envelope: {e}"))
    })?;

    let span = info_span!(
        "skill_request",
        correlation_id = %new_correlation_id(),
        request_id = %envelope.request.request_id,
        request = %envelope.describe(),
        session_id = envelope.session_id().unwrap_or("-"),
    );

    let response = state
        .skill
        .invoke(&envelope)
        .instrument(span)
        .await
        .map_err(|e| {
            warn!(error = %e, "Skill request rejected");
            ApiError::from(e)
        })?;

    Ok(Json(response))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub inference_calls: u64,
    pub total_tokens: u64,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let usage = state.assistant.usage();
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.assistant.model().to_string(),
        inference_calls: usage.calls,
        total_tokens: usage.usage.total_tokens(),
    })
}
