//! Capsule share handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::dto::request::ShareCapsuleBody;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/shareCapsule
pub async fn share_capsule(
    State(state): State<AppState>,
    payload: Result<Json<ShareCapsuleBody>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let body = payload.map(|Json(body)| body).unwrap_or_default();

    state.share_service.share(body.into()).await?;

    Ok(Json(MessageResponse {
        message: "Capsule partagée avec succès!".to_string(),
    }))
}
