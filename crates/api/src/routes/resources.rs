//! Generic CRUD over the named record lists inside the content document.
//!
//! Each mutation is an uncoordinated read-modify-write of the whole
//! document; concurrent writers race and the last write wins.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;

use mix_masters_core::content::{resource, ResourceKind};
use mix_masters_core::media;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/{resource}", get(list_records).post(create_record))
        .route(
            "/api/{resource}/{id}",
            put(update_record).delete(delete_record),
        )
}

fn resolve(segment: &str) -> Result<ResourceKind, ApiError> {
    ResourceKind::parse(segment).ok_or_else(|| ApiError::NotFound("Unknown resource".to_string()))
}

async fn list_records(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> ApiResult<Json<Vec<Value>>> {
    let kind = resolve(&segment)?;
    let content = state.content().read().await?;
    Ok(Json(kind.list(&content).clone()))
}

async fn create_record(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let kind = resolve(&segment)?;
    let mut content = state.content().read().await?;
    let record = resource::append_record(kind.list_mut(&mut content), &body);
    state.content().replace(&content).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_record(
    State(state): State<AppState>,
    Path((segment, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let kind = resolve(&segment)?;
    let mut content = state.content().read().await?;
    let (previous, merged) = resource::merge_record(kind.list_mut(&mut content), &id, &body)?;
    state.content().replace(&content).await?;

    for file in media::replaced_media_files(&previous, &merged) {
        media::cleanup_file(&state.config().uploads_dir, &file);
    }
    Ok(Json(merged))
}

async fn delete_record(
    State(state): State<AppState>,
    Path((segment, id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let kind = resolve(&segment)?;
    let mut content = state.content().read().await?;
    let removed = resource::remove_record(kind.list_mut(&mut content), &id)?;
    state.content().replace(&content).await?;

    media::cleanup_record_media(&state.config().uploads_dir, &removed);
    Ok(StatusCode::NO_CONTENT)
}
