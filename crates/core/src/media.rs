//! Upload validation and local media-file bookkeeping.
//!
//! Uploaded files are stored on disk under a random name and served
//! statically under [`UPLOAD_PUBLIC_PREFIX`]. When a record that references
//! such a file is deleted or its URL replaced, the orphaned file is removed
//! best-effort on a detached task; failures are logged, never surfaced.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

/// Upload size ceiling, 80 MB.
pub const MAX_UPLOAD_BYTES: usize = 80 * 1024 * 1024;

/// Multipart field name the upload endpoint accepts.
pub const UPLOAD_FIELD: &str = "media";

/// Public path prefix the uploads directory is served under.
pub const UPLOAD_PUBLIC_PREFIX: &str = "/uploads";

const ALLOWED_MIME_TYPES: [&str; 7] = [
    "video/mp4",
    "video/webm",
    "video/quicktime",
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/avif",
];

const ALLOWED_EXTENSIONS: [&str; 8] = [
    ".mp4", ".webm", ".mov", ".jpg", ".jpeg", ".png", ".webp", ".avif",
];

/// Record fields that may carry a media URL worth cleaning up.
const MEDIA_URL_FIELDS: [&str; 6] = ["mediaUrl", "posterUrl", "image", "url", "poster", "demoFile"];

/// Lower-cased extension of a file name, dot included; empty when absent.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!(".{}", ext.to_lowercase())
        }
        _ => String::new(),
    }
}

/// A file is accepted when either its MIME type or its extension is on the
/// allow-list; only when both miss is it rejected.
pub fn is_allowed_upload(mime: &str, file_name: &str) -> bool {
    let extension = extension_of(file_name);
    ALLOWED_MIME_TYPES.contains(&mime) || ALLOWED_EXTENSIONS.contains(&extension.as_str())
}

/// Random storage name: unix millis + UUID + the original extension.
pub fn storage_file_name(original_name: &str) -> String {
    format!(
        "{}-{}{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4(),
        extension_of(original_name)
    )
}

/// Map a stored URL or path to the bare file name inside the uploads
/// directory. External URLs and anything that climbs out of the directory
/// yield `None`.
pub fn local_upload_file(value: &str) -> Option<String> {
    let (_, rest) = value.split_once("/uploads/")?;
    if rest.is_empty() || rest.contains('/') || rest.contains("..") {
        return None;
    }
    Some(rest.to_string())
}

/// Local upload files referenced by a record's recognized media fields.
pub fn record_media_files(record: &Value) -> Vec<String> {
    let mut files: Vec<String> = MEDIA_URL_FIELDS
        .iter()
        .filter_map(|field| record.get(field).and_then(Value::as_str))
        .filter_map(local_upload_file)
        .collect();
    files.dedup();
    files
}

/// Local files whose URL a merge replaced: for each recognized field present
/// in `after` with a different value, the file `before` pointed at.
pub fn replaced_media_files(before: &Value, after: &Value) -> Vec<String> {
    MEDIA_URL_FIELDS
        .iter()
        .filter_map(|field| {
            let next = after.get(field)?;
            let previous = before.get(field)?;
            if next == previous {
                return None;
            }
            previous.as_str().and_then(local_upload_file)
        })
        .collect()
}

/// Queue best-effort deletion of every local upload a record references.
pub fn cleanup_record_media(uploads_dir: &Path, record: &Value) {
    for file in record_media_files(record) {
        cleanup_file(uploads_dir, &file);
    }
}

/// Remove one stored file on a detached task. The caller never waits and
/// never sees the outcome beyond a log line.
pub fn cleanup_file(uploads_dir: &Path, file: &str) {
    let path: PathBuf = uploads_dir.join(file);
    tokio::spawn(async move {
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!("removed upload {}", path.display()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!("failed to remove upload {}: {err}", path.display()),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extension_is_lowercased_with_dot() {
        assert_eq!(extension_of("mix.MP4"), ".mp4");
        assert_eq!(extension_of("poster.jpeg"), ".jpeg");
        assert_eq!(extension_of("noext"), "");
        assert_eq!(extension_of(".hidden"), "");
    }

    #[test]
    fn either_mime_or_extension_admits_an_upload() {
        assert!(is_allowed_upload("video/mp4", "set.bin"));
        assert!(is_allowed_upload("application/octet-stream", "set.mp4"));
        assert!(is_allowed_upload("image/png", "photo.png"));
        assert!(!is_allowed_upload("application/pdf", "contract.pdf"));
        assert!(!is_allowed_upload("", ""));
    }

    #[test]
    fn storage_name_keeps_extension_and_is_unique() {
        let a = storage_file_name("demo.Mp4");
        let b = storage_file_name("demo.Mp4");
        assert!(a.ends_with(".mp4"));
        assert_ne!(a, b);
    }

    #[test]
    fn local_upload_file_strips_prefix_and_rejects_foreign_urls() {
        assert_eq!(
            local_upload_file("/uploads/abc.mp4"),
            Some("abc.mp4".to_string())
        );
        assert_eq!(
            local_upload_file("https://site.example/uploads/abc.mp4"),
            Some("abc.mp4".to_string())
        );
        assert_eq!(local_upload_file("https://cdn.example/videos/abc.mp4"), None);
        assert_eq!(local_upload_file("/uploads/"), None);
        assert_eq!(local_upload_file("/uploads/../secrets"), None);
    }

    #[test]
    fn record_media_files_collects_recognized_fields() {
        let record = json!({
            "mediaUrl": "/uploads/clip.mp4",
            "posterUrl": "https://cdn.example/poster.jpg",
            "image": "/uploads/still.png",
            "title": "ignored",
        });
        let files = record_media_files(&record);
        assert_eq!(files, vec!["clip.mp4".to_string(), "still.png".to_string()]);
    }

    #[test]
    fn replaced_media_files_diffs_old_against_merged() {
        let before = json!({"mediaUrl": "/uploads/old.mp4", "posterUrl": "/uploads/keep.jpg"});
        let after = json!({"mediaUrl": "/uploads/new.mp4", "posterUrl": "/uploads/keep.jpg"});
        assert_eq!(
            replaced_media_files(&before, &after),
            vec!["old.mp4".to_string()]
        );
    }
}
