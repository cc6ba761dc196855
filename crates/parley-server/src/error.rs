//! API errors rendered as JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use parley_skill::SkillError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable code, e.g. "bad_request".
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400: the body is not a request envelope.
    BadRequest(String),
    /// 403: the envelope is addressed to another skill.
    Forbidden(String),
    /// 500: no exception handler accepted a handler error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorBody {
            error: code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<SkillError> for ApiError {
    fn from(err: SkillError) -> Self {
        match err {
            SkillError::SkillIdMismatch { .. } => ApiError::Forbidden(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
