use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use mix_masters_core::auth::{self, AuthError};

use crate::error::ApiError;
use crate::state::AppState;

/// Require a valid admin bearer token on every request passing through.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let token = header.strip_prefix("Bearer ").unwrap_or_default();

    if token.is_empty() {
        return Err(AuthError::MissingToken.into());
    }

    let claims = auth::verify_token(token, &state.config().jwt_secret)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
