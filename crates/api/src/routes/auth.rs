use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use mix_masters_core::auth;

use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/auth/login", post(login))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    #[serde(default)]
    password: String,
}

/// Exchange the admin password for a 12-hour bearer token.
async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<Value>> {
    let config = state.config();
    let token = auth::login(&body.password, &config.admin_password, &config.jwt_secret)?;
    Ok(Json(json!({ "token": token })))
}
