//! Shape normalization for the content document.
//!
//! Every read and every write passes through [`sanitize_content`], so a
//! partially-written or legacy document is always normalized before it
//! reaches a caller. Unknown fields do not survive the pass.

use serde_json::{Map, Value};

use super::model::{ResultsSection, SiteContent, SiteSettings};

/// Normalize an arbitrary JSON payload into a well-formed content document.
///
/// String settings default to `""`, list fields are kept only when the value
/// actually is a list (elements are passed through untouched), and
/// `aboutMediaType` collapses to `"image"` or `"video"`.
pub fn sanitize_content(payload: &Value) -> SiteContent {
    SiteContent {
        settings: sanitize_settings(payload.get("settings")),
        events: list_field(payload, "events"),
        judges: list_field(payload, "judges"),
        sponsors: list_field(payload, "sponsors"),
        gallery: list_field(payload, "gallery"),
        faq: list_field(payload, "faq"),
        formats: list_field(payload, "formats"),
        results: sanitize_results(payload.get("results")),
    }
}

fn sanitize_settings(value: Option<&Value>) -> SiteSettings {
    let Some(Value::Object(settings)) = value else {
        return SiteSettings::default();
    };
    SiteSettings {
        hero_video_url: string_field(settings, "heroVideoUrl"),
        hero_poster_url: string_field(settings, "heroPosterUrl"),
        vision_image_url: string_field(settings, "visionImageUrl"),
        about_media_type: if string_field(settings, "aboutMediaType") == "image" {
            "image".to_string()
        } else {
            "video".to_string()
        },
        about_media_url: string_field(settings, "aboutMediaUrl"),
        about_poster_url: string_field(settings, "aboutPosterUrl"),
        vision_title: string_field(settings, "visionTitle"),
        vision_subtitle: string_field(settings, "visionSubtitle"),
        vision_quote: string_field(settings, "visionQuote"),
        vision_body: string_field(settings, "visionBody"),
    }
}

/// Normalize the `results` sub-object. Also used directly by the
/// results-replacement endpoint.
pub fn sanitize_results(value: Option<&Value>) -> ResultsSection {
    let Some(Value::Object(results)) = value else {
        return ResultsSection::default();
    };
    ResultsSection {
        heading: string_field(results, "heading"),
        subtitle: string_field(results, "subtitle"),
        items: results
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn list_field(payload: &Value, key: &str) -> Vec<Value> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payload_yields_complete_document() {
        let content = sanitize_content(&json!({}));
        let doc = serde_json::to_value(&content).unwrap();
        let object = doc.as_object().unwrap();
        for key in ["settings", "events", "judges", "sponsors", "gallery", "faq", "formats", "results"] {
            assert!(object.contains_key(key), "missing top-level key {key}");
        }
        assert_eq!(object.len(), 8);
        assert_eq!(content.settings.about_media_type, "video");
        assert!(content.events.is_empty());
        assert_eq!(content.results, ResultsSection::default());
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let content = sanitize_content(&json!({
            "settings": {"heroVideoUrl": "a.mp4", "rogue": "x"},
            "mystery": [1, 2, 3],
        }));
        let doc = serde_json::to_value(&content).unwrap();
        assert!(doc.get("mystery").is_none());
        assert!(doc["settings"].get("rogue").is_none());
        assert_eq!(doc["settings"]["heroVideoUrl"], "a.mp4");
    }

    #[test]
    fn about_media_type_coerces_to_video_unless_image() {
        let image = sanitize_content(&json!({"settings": {"aboutMediaType": "image"}}));
        assert_eq!(image.settings.about_media_type, "image");

        for bogus in [json!("Image"), json!("audio"), json!(7), json!(null)] {
            let content = sanitize_content(&json!({"settings": {"aboutMediaType": bogus}}));
            assert_eq!(content.settings.about_media_type, "video");
        }
    }

    #[test]
    fn non_list_resources_become_empty_lists() {
        let content = sanitize_content(&json!({
            "events": "nope",
            "judges": {"id": "j1"},
            "faq": null,
            "gallery": [{"id": "g1", "anything": true}],
        }));
        assert!(content.events.is_empty());
        assert!(content.judges.is_empty());
        assert!(content.faq.is_empty());
        assert_eq!(content.gallery.len(), 1);
        assert_eq!(content.gallery[0]["anything"], true);
    }

    #[test]
    fn list_elements_pass_through_unmodified() {
        let weird = json!({"id": 42, "nested": {"deep": ["x"]}});
        let content = sanitize_content(&json!({"sponsors": [weird.clone()]}));
        assert_eq!(content.sponsors[0], weird);
    }

    #[test]
    fn results_defaults_and_passthrough() {
        let content = sanitize_content(&json!({"results": "not an object"}));
        assert_eq!(content.results, ResultsSection::default());

        let content = sanitize_content(&json!({
            "results": {"heading": "Winners", "items": {"id": "x"}}
        }));
        assert_eq!(content.results.heading, "Winners");
        assert_eq!(content.results.subtitle, "");
        assert!(content.results.items.is_empty());
    }

    #[test]
    fn sanitization_is_idempotent() {
        let payload = json!({
            "settings": {"heroVideoUrl": "v.mp4", "aboutMediaType": "weird"},
            "events": [{"id": "e1", "title": "Main"}],
            "results": {"heading": "h", "subtitle": "s", "items": [{"rank": 1}]},
        });
        let once = sanitize_content(&payload);
        let twice = sanitize_content(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }
}
