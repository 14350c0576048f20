//! Validation steps a submission passes before it is recorded.

use serde_json::Value;
use thiserror::Error;

use crate::content::model::SiteContent;
use crate::content::resource::id_matches;

use super::model::RegistrationPayload;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdmissionError {
    #[error("eventId is required")]
    MissingEventId,

    #[error("fullName and email are required")]
    MissingIdentity,

    #[error("Selected event is not active")]
    EventNotActive,

    #[error("You have already registered for this event.")]
    Duplicate { registration_id: String },
}

/// Fail fast on missing required fields. Values are already trimmed by
/// [`RegistrationPayload::from_value`].
pub fn validate(payload: &RegistrationPayload) -> Result<(), AdmissionError> {
    if payload.event_id.is_empty() {
        return Err(AdmissionError::MissingEventId);
    }
    if payload.full_name.is_empty() || payload.email.is_empty() {
        return Err(AdmissionError::MissingIdentity);
    }
    Ok(())
}

/// The referenced event, but only while its status is `active`
/// (case-insensitive). Anything else is not open for registration.
pub fn find_active_event<'a>(content: &'a SiteContent, event_id: &str) -> Option<&'a Value> {
    content.events.iter().find(|event| {
        id_matches(event, event_id)
            && event
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .eq_ignore_ascii_case("active")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(event_id: &str, full_name: &str, email: &str) -> RegistrationPayload {
        RegistrationPayload::from_value(&json!({
            "eventId": event_id,
            "fullName": full_name,
            "email": email,
        }))
    }

    #[test]
    fn rejects_missing_event_id() {
        assert_eq!(
            validate(&payload("", "Maya", "m@x.com")),
            Err(AdmissionError::MissingEventId)
        );
    }

    #[test]
    fn rejects_missing_name_or_email() {
        assert_eq!(
            validate(&payload("e1", "", "m@x.com")),
            Err(AdmissionError::MissingIdentity)
        );
        assert_eq!(
            validate(&payload("e1", "Maya", "   ")),
            Err(AdmissionError::MissingIdentity)
        );
    }

    #[test]
    fn accepts_complete_payload() {
        assert_eq!(validate(&payload("e1", "Maya", "m@x.com")), Ok(()));
    }

    #[test]
    fn active_event_lookup_is_case_insensitive_on_status() {
        let mut content = SiteContent::default();
        content.events = vec![
            json!({"id": "e1", "status": "ACTIVE"}),
            json!({"id": "e2", "status": "Upcoming"}),
            json!({"id": "e3"}),
        ];

        assert!(find_active_event(&content, "e1").is_some());
        assert!(find_active_event(&content, "e2").is_none());
        assert!(find_active_event(&content, "e3").is_none());
        assert!(find_active_event(&content, "ghost").is_none());
    }
}
