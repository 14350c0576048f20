//! Outbound notifications through the external mail relay.
//!
//! Every send is best-effort: failures are logged and reported to the caller
//! as a boolean, never as an error, and nothing is retried or rolled back.

use serde_json::json;
use thiserror::Error;

use crate::registration::model::Registration;

const EVENT_DISPLAY_NAME: &str = "MixMasters Club – International Tamil DJ Battle";

#[derive(Debug, Error)]
enum MailError {
    #[error("mail relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail relay rejected the message with status {0}")]
    Rejected(u16),
}

/// Thin client for the HTTP mail relay.
#[derive(Debug, Clone)]
pub struct Mailer {
    client: reqwest::Client,
    service_url: String,
    api_key: String,
    admin_emails: Vec<String>,
}

impl Mailer {
    pub fn new(service_url: String, api_key: String, admin_emails: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            service_url,
            api_key,
            admin_emails,
        }
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.service_url)
            .header("x-api-key", &self.api_key)
            .json(&json!({ "to": to, "subject": subject, "html": html }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailError::Rejected(status.as_u16()));
        }
        Ok(())
    }

    /// Confirmation to the registrant plus one notification per admin
    /// address. Any failed send flips the returned flag to `false`; the
    /// admin loop keeps going past individual failures.
    pub async fn send_registration_emails(&self, registration: &Registration) -> bool {
        let mut all_sent = true;

        let subject = format!(
            "[{EVENT_DISPLAY_NAME}] Entry Confirmed - {}",
            registration.event_title
        );
        if let Err(err) = self
            .send(
                &registration.payload.email,
                &subject,
                &participant_html(registration),
            )
            .await
        {
            tracing::error!("registration confirmation email failed: {err}");
            all_sent = false;
        }

        let display_name = if registration.payload.stage_name.is_empty() {
            &registration.payload.full_name
        } else {
            &registration.payload.stage_name
        };
        let subject = format!("[NEW REGISTRATION] {display_name} - {EVENT_DISPLAY_NAME}");
        for admin in &self.admin_emails {
            if let Err(err) = self.send(admin, &subject, &admin_html(registration)).await {
                tracing::error!("admin notification email to {admin} failed: {err}");
                all_sent = false;
            }
        }

        all_sent
    }
}

fn participant_html(registration: &Registration) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body style="background:#050505;color:#fff;font-family:Helvetica,Arial,sans-serif;margin:0;padding:0;">
  <table role="presentation" width="100%" style="max-width:600px;margin:0 auto;background:#0a0a0a;border:1px solid #1a1a1a;">
    <tr>
      <td style="padding:40px;text-align:center;border-bottom:1px solid #1a1a1a;">
        <h1 style="color:#C5A059;font-size:28px;letter-spacing:2px;margin:0;text-transform:uppercase;">MixMasters Club</h1>
        <p style="color:#666;font-size:10px;letter-spacing:4px;text-transform:uppercase;">International Tamil DJ Battle</p>
      </td>
    </tr>
    <tr>
      <td style="padding:40px;">
        <h2 style="font-size:20px;">Entry Confirmed, {full_name}.</h2>
        <p style="color:#aaa;line-height:1.6;">Your application for the <strong>{event}</strong> has been received. Our council is currently reviewing your showcase.</p>
        <table role="presentation" width="100%" style="background:#0f0f0f;border:1px solid #1a1a1a;">
          <tr>
            <td style="padding:20px;">
              <p style="color:#C5A059;font-size:10px;text-transform:uppercase;letter-spacing:2px;margin:0 0 10px 0;">Battle Details</p>
              <p style="margin:0;font-size:14px;"><strong>Location:</strong> {location}</p>
              <p style="margin:5px 0 0 0;font-size:14px;"><strong>Date:</strong> {date}</p>
            </td>
          </tr>
        </table>
        <p style="color:#aaa;line-height:1.6;">Direct any further enquiries to our Instagram DM or reply to this email.</p>
      </td>
    </tr>
    <tr>
      <td style="padding:20px 40px;background:#000;text-align:center;border-top:1px solid #1a1a1a;">
        <p style="color:#444;font-size:10px;letter-spacing:1px;margin:0;">&copy; 2026 Mix Masters Club - Singapore</p>
      </td>
    </tr>
  </table>
</body>
</html>"#,
        full_name = registration.payload.full_name,
        event = EVENT_DISPLAY_NAME,
        location = registration.event_location,
        date = registration.event_date,
    )
}

fn admin_html(registration: &Registration) -> String {
    let payload = &registration.payload;
    let or_na = |value: &str| {
        if value.is_empty() {
            "N/A".to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        r#"<!DOCTYPE html>
<html>
<body style="background:#f4f4f4;padding:20px;font-family:sans-serif;">
  <div style="background:#fff;padding:30px;border-radius:8px;">
    <h2 style="color:#111;">New Artist Registration</h2>
    <hr style="border:none;border-top:1px solid #eee;margin:20px 0;">
    <table style="width:100%;border-collapse:collapse;">
      <tr><td style="padding:8px 0;color:#666;"><strong>Event:</strong></td><td>{event_title}</td></tr>
      <tr><td style="padding:8px 0;color:#666;"><strong>Artist Name:</strong></td><td>{stage_name} ({full_name})</td></tr>
      <tr><td style="padding:8px 0;color:#666;"><strong>Email:</strong></td><td>{email}</td></tr>
      <tr><td style="padding:8px 0;color:#666;"><strong>Origin:</strong></td><td>{city}, {nationality}</td></tr>
      <tr><td style="padding:8px 0;color:#666;"><strong>Experience:</strong></td><td>{experience} Years</td></tr>
      <tr><td style="padding:8px 0;color:#666;"><strong>Instagram:</strong></td><td>{instagram}</td></tr>
      <tr><td style="padding:8px 0;color:#666;"><strong>Showcase:</strong></td><td>{sound_cloud}</td></tr>
      <tr><td style="padding:8px 0;color:#666;"><strong>File:</strong></td><td>{demo_file}</td></tr>
    </table>
    <p style="margin-top:30px;font-size:12px;color:#999;">Submitted at: {created_at}</p>
  </div>
</body>
</html>"#,
        event_title = registration.event_title,
        stage_name = or_na(&payload.stage_name),
        full_name = payload.full_name,
        email = payload.email,
        city = payload.city,
        nationality = payload.nationality,
        experience = payload.experience,
        instagram = payload.instagram,
        sound_cloud = or_na(&payload.sound_cloud),
        demo_file = or_na(&payload.demo_file),
        created_at = registration.created_at.to_rfc3339(),
    )
}
