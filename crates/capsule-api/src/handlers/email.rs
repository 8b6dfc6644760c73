//! Email dispatch handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use capsule_core::error::AppError;

use crate::dto::request::SendEmailBody;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/sendEmail
///
/// An unparseable or absent body is treated as an empty request so the
/// response is the 400 validation error, not a transport-level rejection.
pub async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<SendEmailBody>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let body = payload.map(|Json(body)| body).unwrap_or_default();

    state.email_service.send(body.into()).await?;

    Ok(Json(MessageResponse {
        message: "Email envoyé avec succès!".to_string(),
    }))
}

/// Fallback for any verb other than POST on /api/sendEmail.
pub async fn method_not_allowed() -> ApiError {
    AppError::method_not_allowed("Méthode non autorisée").into()
}
