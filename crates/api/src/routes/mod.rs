pub mod auth;
pub mod content;
pub mod health;
pub mod public;
pub mod registrations;
pub mod resources;
pub mod upload;

use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::services::ServeDir;

use crate::middleware::auth::require_admin;
use crate::state::AppState;

/// Assemble the full router with all route groups.
///
/// Static path segments win over the `{resource}` captures, so the admin
/// content/results/upload/registrations routes coexist with the generic
/// CRUD router.
pub fn build_router(state: AppState) -> Router {
    let admin = Router::new()
        .merge(content::routes())
        .merge(upload::routes())
        .merge(registrations::routes())
        .merge(resources::routes())
        .layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(health::routes())
        .merge(public::routes())
        .merge(auth::routes())
        .merge(admin)
        .nest_service(
            "/uploads",
            ServeDir::new(state.config().uploads_dir.clone()),
        )
        .with_state(state)
}
