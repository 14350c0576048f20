use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health_check))
}

/// Lightweight service probe; reports storage layout, no database round trip.
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "mix_masters_backend",
        "storage": {
            "db": "postgres",
            "media": "local-filesystem",
            "uploadsDir": "/uploads",
        },
        "date": Utc::now().to_rfc3339(),
    }))
}
