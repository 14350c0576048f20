//! Unauthenticated surface: cached content reads and registration intake.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use mix_masters_core::registration::{admission, AdmissionError, Registration, RegistrationPayload};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/public/content", get(public_content))
        .route("/api/public/main-event", get(main_event))
        .route("/api/public/registrations", post(submit_registration))
}

async fn public_content(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let content = state.content().read().await?;
    Ok((
        [(
            header::CACHE_CONTROL,
            "public, s-maxage=120, stale-while-revalidate=600",
        )],
        Json(content),
    ))
}

async fn main_event(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let content = state.content().read().await?;
    let main_event = content.main_event().cloned().unwrap_or(Value::Null);
    Ok((
        [(
            header::CACHE_CONTROL,
            "public, s-maxage=300, stale-while-revalidate=3600",
        )],
        Json(json!({
            "mainEvent": main_event,
            "updatedAt": Utc::now().to_rfc3339(),
        })),
    ))
}

/// Admission pipeline: sanitize, validate, check the event is live, reject
/// duplicates, persist, then notify best-effort.
async fn submit_registration(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<impl IntoResponse> {
    let payload = RegistrationPayload::from_value(&body);
    admission::validate(&payload)?;

    let content = state.content().read().await?;
    let event = admission::find_active_event(&content, &payload.event_id)
        .ok_or(AdmissionError::EventNotActive)?;

    let email = payload.email.to_lowercase();
    if let Some(existing) = state
        .registrations()
        .find_existing_id(&email, &payload.event_id)
        .await?
    {
        return Err(AdmissionError::Duplicate {
            registration_id: existing,
        }
        .into());
    }

    let registration = Registration::admit(payload, event);
    state.registrations().insert(&registration).await?;

    // The record is durable before any notification is attempted; a failed
    // send only flips the flag.
    let email_sent = state.mailer().send_registration_emails(&registration).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Registration submitted",
            "registrationId": registration.id,
            "emailSent": email_sent,
        })),
    ))
}
