use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use mix_masters_core::auth::AuthError;
use mix_masters_core::content::resource::ResourceError;
use mix_masters_core::registration::AdmissionError;

/// API error type mapping domain failures to `{ "message": ... }` responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Conflict {
        message: String,
        registration_id: String,
    },

    #[error("{0}")]
    Configuration(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "message": msg }))
            }
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, json!({ "message": msg }))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            ApiError::Conflict {
                message,
                registration_id,
            } => (
                StatusCode::CONFLICT,
                json!({ "message": message, "registrationId": registration_id }),
            ),
            ApiError::Configuration(msg) => {
                tracing::error!("configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "message": msg }))
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
            ApiError::Database(err) => {
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<AdmissionError> for ApiError {
    fn from(err: AdmissionError) -> Self {
        match err {
            AdmissionError::Duplicate { registration_id } => ApiError::Conflict {
                message: "You have already registered for this event.".to_string(),
                registration_id,
            },
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotConfigured => ApiError::Configuration(err.to_string()),
            AuthError::Signing(_) => ApiError::Internal(err.to_string()),
            other => ApiError::Unauthorized(other.to_string()),
        }
    }
}

impl From<ResourceError> for ApiError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::RecordNotFound => ApiError::NotFound(err.to_string()),
        }
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
