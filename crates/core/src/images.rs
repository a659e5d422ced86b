//! Image URL resolution and upload-path policy.
//!
//! Stored rows hold relative paths (`uploads/<category>/<file>`); responses
//! carry absolute URLs pointing at the image-serving endpoint. The serving
//! side enforces a fixed allow-list of upload directories so a crafted path
//! can never reach outside the upload root.

use serde_json::Value;

/// Response keys whose values are rewritten from relative paths to absolute
/// URLs. `video_url` and `highlights_url` are intentionally NOT rewritten:
/// the frontend consumes those links raw (see DESIGN.md).
pub const REWRITTEN_URL_KEYS: &[&str] = &["image_url", "poster_url", "logo_url", "icon_url"];

/// Upload subdirectories the serving endpoint is allowed to read from.
pub const ALLOWED_UPLOAD_DIRS: &[&str] = &[
    "uploads/tournaments",
    "uploads/events",
    "uploads/committee",
    "uploads/gallery",
    "uploads/sponsors",
    "uploads/achievements",
];

/// Resolve a stored path into a publicly fetchable URL.
///
/// Already-absolute URLs pass through unchanged, so re-resolving an
/// already-resolved value is a no-op.
pub fn resolve_image_url(base_url: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }
    format!(
        "{}/api/v1/images/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Walk an arbitrary JSON value and rewrite every string at one of the
/// [`REWRITTEN_URL_KEYS`] into an absolute URL. Arrays and nested objects
/// are traversed; everything else is left untouched.
pub fn rewrite_image_urls(value: &mut Value, base_url: &str) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if REWRITTEN_URL_KEYS.contains(&key.as_str()) {
                    if let Value::String(path) = entry {
                        if !path.is_empty() {
                            *entry = Value::String(resolve_image_url(base_url, path));
                        }
                    }
                } else {
                    rewrite_image_urls(entry, base_url);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                rewrite_image_urls(item, base_url);
            }
        }
        _ => {}
    }
}

/// Check whether a request path may be served from disk.
///
/// The path is normalized segment-by-segment first: absolute paths, empty
/// segments, `.` and `..` are all rejected outright, so a traversal attempt
/// never reaches the prefix check. The surviving path must then start with
/// one of the [`ALLOWED_UPLOAD_DIRS`].
pub fn is_allowed_path(path: &str) -> bool {
    if path.starts_with('/') || path.contains('\\') {
        return false;
    }
    let segments: Vec<&str> = path.split('/').collect();
    if segments
        .iter()
        .any(|s| s.is_empty() || *s == "." || *s == "..")
    {
        return false;
    }
    ALLOWED_UPLOAD_DIRS
        .iter()
        .any(|dir| path.starts_with(&format!("{dir}/")))
}

/// Guess a Content-Type from a file extension.
pub fn content_type_for_extension(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        _ => "application/octet-stream",
    }
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
