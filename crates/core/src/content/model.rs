use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The editable site content, stored whole as a single JSONB document.
///
/// All seven top-level keys are always present after sanitization; the list
/// fields hold free-form records whose only relied-upon field is `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub settings: SiteSettings,
    pub events: Vec<Value>,
    pub judges: Vec<Value>,
    pub sponsors: Vec<Value>,
    pub gallery: Vec<Value>,
    pub faq: Vec<Value>,
    pub formats: Vec<Value>,
    pub results: ResultsSection,
}

/// Fixed string fields rendered on the homepage hero/about/vision sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub hero_video_url: String,
    pub hero_poster_url: String,
    pub vision_image_url: String,
    /// Either `"image"` or `"video"`, nothing else.
    pub about_media_type: String,
    pub about_media_url: String,
    pub about_poster_url: String,
    pub vision_title: String,
    pub vision_subtitle: String,
    pub vision_quote: String,
    pub vision_body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSection {
    pub heading: String,
    pub subtitle: String,
    pub items: Vec<Value>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            hero_video_url: String::new(),
            hero_poster_url: String::new(),
            vision_image_url: String::new(),
            about_media_type: "video".to_string(),
            about_media_url: String::new(),
            about_poster_url: String::new(),
            vision_title: String::new(),
            vision_subtitle: String::new(),
            vision_quote: String::new(),
            vision_body: String::new(),
        }
    }
}

impl SiteContent {
    /// The event flagged for homepage display: first record with a truthy
    /// `isMainEvent`, falling back to the first event in the list.
    pub fn main_event(&self) -> Option<&Value> {
        self.events
            .iter()
            .find(|event| is_truthy(event.get("isMainEvent")))
            .or_else(|| self.events.first())
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn main_event_prefers_flagged_record() {
        let mut content = SiteContent::default();
        content.events = vec![
            json!({"id": "a", "title": "Qualifier"}),
            json!({"id": "b", "title": "Final", "isMainEvent": true}),
        ];

        let main = content.main_event().unwrap();
        assert_eq!(main.get("id").unwrap(), "b");
    }

    #[test]
    fn main_event_falls_back_to_first() {
        let mut content = SiteContent::default();
        content.events = vec![
            json!({"id": "a", "isMainEvent": false}),
            json!({"id": "b"}),
        ];

        assert_eq!(content.main_event().unwrap().get("id").unwrap(), "a");
    }

    #[test]
    fn main_event_none_when_no_events() {
        assert!(SiteContent::default().main_event().is_none());
    }

    #[test]
    fn settings_default_to_video_media_type() {
        assert_eq!(SiteSettings::default().about_media_type, "video");
    }
}
