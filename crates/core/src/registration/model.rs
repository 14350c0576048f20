use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The fixed field set accepted from the public registration form.
/// Anything else a client sends is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub role: String,
    pub event_id: String,
    pub full_name: String,
    pub email: String,
    pub nationality: String,
    pub city: String,
    pub age: String,
    pub stage_name: String,
    pub instagram: String,
    pub experience: String,
    pub sound_cloud: String,
    pub demo_file: String,
    pub source: String,
}

impl RegistrationPayload {
    /// Extract the known fields from an arbitrary JSON body: strings are
    /// trimmed, `role` collapses to `patron` or `artist`, `source` defaults
    /// to `website`.
    pub fn from_value(body: &Value) -> Self {
        let role = if body.get("role").and_then(Value::as_str) == Some("patron") {
            "patron"
        } else {
            "artist"
        };
        let source = {
            let source = trimmed(body, "source");
            if source.is_empty() {
                "website".to_string()
            } else {
                source
            }
        };
        Self {
            role: role.to_string(),
            event_id: stringified(body.get("eventId")),
            full_name: trimmed(body, "fullName"),
            email: trimmed(body, "email"),
            nationality: trimmed(body, "nationality"),
            city: trimmed(body, "city"),
            age: trimmed(body, "age"),
            stage_name: trimmed(body, "stageName"),
            instagram: trimmed(body, "instagram"),
            experience: trimmed(body, "experience"),
            sound_cloud: trimmed(body, "soundCloud"),
            demo_file: trimmed(body, "demoFile"),
            source,
        }
    }
}

/// A recorded sign-up: the sanitized payload plus a denormalized snapshot of
/// the referenced event taken at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    #[serde(flatten)]
    pub payload: RegistrationPayload,
    pub event_title: String,
    pub event_date: String,
    pub event_location: String,
    pub event_status: String,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    /// Build the stored record for an admitted submission. The email is
    /// lower-cased here; the event snapshot is copied from the live record.
    pub fn admit(mut payload: RegistrationPayload, event: &Value) -> Self {
        payload.email = payload.email.to_lowercase();
        Self {
            id: Uuid::new_v4().to_string(),
            event_title: event_field(event, "title"),
            event_date: event_field(event, "date"),
            event_location: event_field(event, "location"),
            event_status: event_field(event, "status"),
            created_at: Utc::now(),
            payload,
        }
    }
}

fn event_field(event: &Value, key: &str) -> String {
    event
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn trimmed(body: &Value, key: &str) -> String {
    stringified(body.get(key)).trim().to_string()
}

fn stringified(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_trims_and_defaults() {
        let payload = RegistrationPayload::from_value(&json!({
            "eventId": "main-2026",
            "fullName": "  Maya Raj  ",
            "email": " Maya@Example.COM ",
            "stageName": "DJ Maya",
            "extraneous": "dropped",
        }));
        assert_eq!(payload.full_name, "Maya Raj");
        assert_eq!(payload.email, "Maya@Example.COM");
        assert_eq!(payload.role, "artist");
        assert_eq!(payload.source, "website");
        assert_eq!(payload.nationality, "");

        let wire = serde_json::to_value(&payload).unwrap();
        assert!(wire.get("extraneous").is_none());
        assert_eq!(wire["stageName"], "DJ Maya");
        assert_eq!(wire["soundCloud"], "");
    }

    #[test]
    fn role_collapses_to_artist_unless_patron() {
        let patron = RegistrationPayload::from_value(&json!({"role": "patron"}));
        assert_eq!(patron.role, "patron");
        for other in [json!("admin"), json!("Artist"), json!(1), json!(null)] {
            let payload = RegistrationPayload::from_value(&json!({"role": other}));
            assert_eq!(payload.role, "artist");
        }
    }

    #[test]
    fn numeric_event_id_is_stringified() {
        let payload = RegistrationPayload::from_value(&json!({"eventId": 42}));
        assert_eq!(payload.event_id, "42");
    }

    #[test]
    fn admit_lowercases_email_and_snapshots_event() {
        let payload = RegistrationPayload::from_value(&json!({
            "eventId": "main-2026",
            "fullName": "Maya Raj",
            "email": "Maya@Example.COM",
        }));
        let event = json!({
            "id": "main-2026",
            "title": "Night Circuit",
            "date": "2026-05-22",
            "location": "Hard Rock Cafe, Singapore",
            "status": "Active",
        });

        let registration = Registration::admit(payload, &event);
        assert!(!registration.id.is_empty());
        assert_eq!(registration.payload.email, "maya@example.com");
        assert_eq!(registration.event_title, "Night Circuit");
        assert_eq!(registration.event_status, "Active");

        let wire = serde_json::to_value(&registration).unwrap();
        assert_eq!(wire["eventTitle"], "Night Circuit");
        assert_eq!(wire["fullName"], "Maya Raj");
        assert!(wire["createdAt"].as_str().is_some());
    }
}
