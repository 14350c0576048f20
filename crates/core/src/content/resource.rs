//! Named record lists inside the content document, and the list operations
//! behind the generic CRUD endpoints.

use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use super::model::SiteContent;

/// The closed set of record lists reachable through the generic CRUD router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Events,
    Judges,
    Sponsors,
    Gallery,
    Faq,
    Formats,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Record not found")]
    RecordNotFound,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Events,
        ResourceKind::Judges,
        ResourceKind::Sponsors,
        ResourceKind::Gallery,
        ResourceKind::Faq,
        ResourceKind::Formats,
    ];

    /// Parse a URL path segment into a resource kind.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "events" => Some(ResourceKind::Events),
            "judges" => Some(ResourceKind::Judges),
            "sponsors" => Some(ResourceKind::Sponsors),
            "gallery" => Some(ResourceKind::Gallery),
            "faq" => Some(ResourceKind::Faq),
            "formats" => Some(ResourceKind::Formats),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Events => "events",
            ResourceKind::Judges => "judges",
            ResourceKind::Sponsors => "sponsors",
            ResourceKind::Gallery => "gallery",
            ResourceKind::Faq => "faq",
            ResourceKind::Formats => "formats",
        }
    }

    pub fn list<'a>(&self, content: &'a SiteContent) -> &'a Vec<Value> {
        match self {
            ResourceKind::Events => &content.events,
            ResourceKind::Judges => &content.judges,
            ResourceKind::Sponsors => &content.sponsors,
            ResourceKind::Gallery => &content.gallery,
            ResourceKind::Faq => &content.faq,
            ResourceKind::Formats => &content.formats,
        }
    }

    pub fn list_mut<'a>(&self, content: &'a mut SiteContent) -> &'a mut Vec<Value> {
        match self {
            ResourceKind::Events => &mut content.events,
            ResourceKind::Judges => &mut content.judges,
            ResourceKind::Sponsors => &mut content.sponsors,
            ResourceKind::Gallery => &mut content.gallery,
            ResourceKind::Faq => &mut content.faq,
            ResourceKind::Formats => &mut content.formats,
        }
    }
}

/// Compare a record's `id` against a path id, stringifying numeric ids.
pub fn id_matches(record: &Value, id: &str) -> bool {
    match record.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

/// Append a new record built from `body` with a freshly generated id.
/// Caller-supplied fields win, except `id` which is always the generated one.
pub fn append_record(list: &mut Vec<Value>, body: &Value) -> Value {
    let mut record: Map<String, Value> = body.as_object().cloned().unwrap_or_default();
    record.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    let record = Value::Object(record);
    list.push(record.clone());
    record
}

/// Shallow-merge `body` over the record whose id matches, keeping the
/// original id. Returns `(previous, merged)` so callers can diff media URLs.
pub fn merge_record(
    list: &mut [Value],
    id: &str,
    body: &Value,
) -> Result<(Value, Value), ResourceError> {
    let index = list
        .iter()
        .position(|record| id_matches(record, id))
        .ok_or(ResourceError::RecordNotFound)?;

    let previous = list[index].clone();
    let original_id = previous.get("id").cloned().unwrap_or(Value::Null);

    let mut merged: Map<String, Value> = previous.as_object().cloned().unwrap_or_default();
    if let Some(patch) = body.as_object() {
        for (key, value) in patch {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged.insert("id".to_string(), original_id);

    let merged = Value::Object(merged);
    list[index] = merged.clone();
    Ok((previous, merged))
}

/// Remove the first record whose id matches, returning it.
pub fn remove_record(list: &mut Vec<Value>, id: &str) -> Result<Value, ResourceError> {
    let index = list
        .iter()
        .position(|record| id_matches(record, id))
        .ok_or(ResourceError::RecordNotFound)?;
    Ok(list.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_known_and_unknown_segments() {
        assert_eq!(ResourceKind::parse("faq"), Some(ResourceKind::Faq));
        assert_eq!(ResourceKind::parse("events"), Some(ResourceKind::Events));
        assert_eq!(ResourceKind::parse("registrations"), None);
        assert_eq!(ResourceKind::parse("Events"), None);
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn append_generates_id_even_when_body_supplies_one() {
        let mut list = Vec::new();
        let record = append_record(&mut list, &json!({"id": "forged", "title": "X"}));
        let id = record["id"].as_str().unwrap();
        assert_ne!(id, "forged");
        assert!(!id.is_empty());
        assert_eq!(record["title"], "X");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn merge_keeps_original_id_and_overrides_fields() {
        let mut list = vec![json!({"id": "e1", "title": "Old", "price": "10"})];
        let (previous, merged) =
            merge_record(&mut list, "e1", &json!({"title": "New", "id": "hijack"})).unwrap();
        assert_eq!(previous["title"], "Old");
        assert_eq!(merged["id"], "e1");
        assert_eq!(merged["title"], "New");
        assert_eq!(merged["price"], "10");
        assert_eq!(list[0], merged);
    }

    #[test]
    fn merge_unknown_id_is_not_found() {
        let mut list = vec![json!({"id": "e1"})];
        assert_eq!(
            merge_record(&mut list, "missing", &json!({})),
            Err(ResourceError::RecordNotFound)
        );
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut list = vec![
            json!({"id": "dup", "n": 1}),
            json!({"id": "dup", "n": 2}),
        ];
        let removed = remove_record(&mut list, "dup").unwrap();
        assert_eq!(removed["n"], 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut list = vec![json!({"id": "e1"})];
        assert_eq!(
            remove_record(&mut list, "e2"),
            Err(ResourceError::RecordNotFound)
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn numeric_ids_match_by_string_comparison() {
        let mut list = vec![json!({"id": 42, "title": "numeric"})];
        let removed = remove_record(&mut list, "42").unwrap();
        assert_eq!(removed["title"], "numeric");
    }
}
