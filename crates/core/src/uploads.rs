//! Upload validation and filename rules.
//!
//! One parameterized spec per resource replaces per-handler copies of the
//! same extension check + rename logic. The filesystem side (writing and
//! removing files) lives in the API crate; this module is pure.

use uuid::Uuid;

use crate::error::CoreError;

/// Image extensions accepted for posters, member photos, and gallery images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Sponsor logos and achievement icons additionally accept SVG.
pub const IMAGE_EXTENSIONS_WITH_SVG: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Video extensions accepted for gallery videos.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "wmv", "flv", "webm"];

/// Per-resource upload configuration: the multipart field name, the
/// destination category directory under `uploads/`, and the extension
/// allow-list.
#[derive(Debug, Clone, Copy)]
pub struct UploadSpec {
    pub field: &'static str,
    pub category: &'static str,
    pub allowed: &'static [&'static str],
}

/// Extract and validate a file extension against an allow-list.
///
/// Returns the lowercased extension on success.
pub fn validate_extension(filename: &str, allowed: &[&str]) -> Result<String, CoreError> {
    let ext = filename
        .rsplit('.')
        .next()
        .filter(|e| *e != filename)
        .unwrap_or("")
        .to_lowercase();
    if ext.is_empty() || !allowed.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Invalid file type. Allowed types: {}",
            allowed.join(", ")
        )));
    }
    Ok(ext)
}

/// Generate a collision-resistant stored filename: random UUID plus the
/// upload timestamp plus the validated extension. Not cryptographically
/// guaranteed unique, but two colliding uploads would need the same UUID in
/// the same second.
pub fn unique_filename(ext: &str) -> String {
    format!(
        "{}_{}.{ext}",
        Uuid::new_v4().simple(),
        chrono::Utc::now().timestamp()
    )
}

/// Relative path stored in the row for an upload in `category`.
pub fn relative_path(category: &str, filename: &str) -> String {
    format!("uploads/{category}/{filename}")
}
