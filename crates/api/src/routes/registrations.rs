//! Admin view over recorded registrations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::Value;

use mix_masters_core::media;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/registrations", get(list_registrations))
        .route("/api/registrations/{id}", delete(delete_registration))
}

async fn list_registrations(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    Ok(Json(state.registrations().list().await?))
}

/// Remove a registration and queue cleanup of any uploaded media it
/// references (the demo file, typically).
async fn delete_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    match state.registrations().delete(&id).await? {
        Some(record) => {
            media::cleanup_record_media(&state.config().uploads_dir, &record);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::NotFound("Registration not found".to_string())),
    }
}
