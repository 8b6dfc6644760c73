//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use capsule_core::error::{AppError, ErrorKind};

/// Standard API error response body.
///
/// `details` is present only on the paths whose contract includes the
/// underlying cause (the plain email-send route); everywhere else the body
/// is just the `error` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Optional underlying cause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// HTTP-boundary wrapper for [`AppError`].
///
/// Handlers return this so the ? operator converts domain errors at the
/// route edge; no error propagates past it.
#[derive(Debug, Clone)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorKind::Mail
            | ErrorKind::Store
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %self.0, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: self.0.message,
            details: self.0.details,
        };

        (status, Json(body)).into_response()
    }
}
