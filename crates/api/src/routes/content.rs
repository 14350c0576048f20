//! Admin read/replace of the content document and its results sub-object.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use mix_masters_core::content::sanitize::sanitize_results;
use mix_masters_core::content::{ResultsSection, SiteContent};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/content", get(read_content).put(replace_content))
        .route("/api/results", get(read_results).put(replace_results))
}

async fn read_content(State(state): State<AppState>) -> ApiResult<Json<SiteContent>> {
    Ok(Json(state.content().read().await?))
}

/// Full-document replacement: the caller's payload is sanitized and becomes
/// the entire new document. There is no field-level merge.
async fn replace_content(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let content = state.content().write(&body).await?;
    Ok(Json(json!({
        "message": "Content updated",
        "content": content,
    })))
}

async fn read_results(State(state): State<AppState>) -> ApiResult<Json<ResultsSection>> {
    let content = state.content().read().await?;
    Ok(Json(content.results))
}

async fn replace_results(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<ResultsSection>> {
    let mut content = state.content().read().await?;
    content.results = sanitize_results(Some(&body));
    state.content().replace(&content).await?;
    Ok(Json(content.results))
}
