//! Single-file media upload onto local disk.

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use mix_masters_core::media;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/upload", post(upload_media))
        // Generous enough for the 80 MB file plus multipart framing; the
        // exact ceiling is enforced per file below.
        .layer(DefaultBodyLimit::max(media::MAX_UPLOAD_BYTES + 1024 * 1024))
}

async fn upload_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?
    {
        if field.name() != Some(media::UPLOAD_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let mime_type = field.content_type().unwrap_or_default().to_string();
        if !media::is_allowed_upload(&mime_type, &original_name) {
            return Err(ApiError::BadRequest(format!(
                "Unsupported file type: {mime_type}"
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;
        if data.len() > media::MAX_UPLOAD_BYTES {
            return Err(ApiError::BadRequest("File too large".to_string()));
        }

        let stored_name = media::storage_file_name(&original_name);
        let target = state.config().uploads_dir.join(&stored_name);
        tokio::fs::write(&target, &data)
            .await
            .map_err(|err| ApiError::Internal(format!("failed to store upload: {err}")))?;

        let path = format!("{}/{stored_name}", media::UPLOAD_PUBLIC_PREFIX);
        let base = public_base_url(state.config(), &headers);
        return Ok((
            StatusCode::CREATED,
            Json(json!({
                "fileName": original_name,
                "mimeType": mime_type,
                "size": data.len(),
                "path": path,
                "url": format!("{base}{path}"),
            })),
        ));
    }

    Err(ApiError::BadRequest("No file uploaded".to_string()))
}

fn public_base_url(config: &AppConfig, headers: &HeaderMap) -> String {
    if !config.public_url.is_empty() {
        return config.public_url.clone();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}")
}
