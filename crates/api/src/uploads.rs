//! Filesystem side of file uploads: writing validated files under the
//! configured upload root and removing them when rows are deleted.
//!
//! Validation and naming rules live in `esports_core::uploads`; this module
//! only touches disk.

use std::path::PathBuf;

use esports_core::uploads::{
    relative_path, unique_filename, validate_extension, UploadSpec, IMAGE_EXTENSIONS,
    IMAGE_EXTENSIONS_WITH_SVG, VIDEO_EXTENSIONS,
};

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::extract::UploadedFile;

/// Tournament poster images.
pub const TOURNAMENT_POSTER: UploadSpec = UploadSpec {
    field: "poster",
    category: "tournaments",
    allowed: IMAGE_EXTENSIONS,
};

/// Event poster images.
pub const EVENT_POSTER: UploadSpec = UploadSpec {
    field: "poster",
    category: "events",
    allowed: IMAGE_EXTENSIONS,
};

/// Committee member photos.
pub const COMMITTEE_PHOTO: UploadSpec = UploadSpec {
    field: "image",
    category: "committee",
    allowed: IMAGE_EXTENSIONS,
};

/// Gallery images.
pub const GALLERY_IMAGE: UploadSpec = UploadSpec {
    field: "image",
    category: "gallery",
    allowed: IMAGE_EXTENSIONS,
};

/// Gallery videos share the category directory with gallery images.
pub const GALLERY_VIDEO: UploadSpec = UploadSpec {
    field: "video",
    category: "gallery",
    allowed: VIDEO_EXTENSIONS,
};

/// Sponsor logos. SVG allowed.
pub const SPONSOR_LOGO: UploadSpec = UploadSpec {
    field: "logo",
    category: "sponsors",
    allowed: IMAGE_EXTENSIONS_WITH_SVG,
};

/// Achievement icons. SVG allowed.
pub const ACHIEVEMENT_ICON: UploadSpec = UploadSpec {
    field: "icon",
    category: "achievements",
    allowed: IMAGE_EXTENSIONS_WITH_SVG,
};

/// Validate and store an uploaded file, returning the relative path to
/// persist in the row (`uploads/<category>/<generated-name>`).
pub async fn store(
    config: &ServerConfig,
    spec: &UploadSpec,
    file: &UploadedFile,
) -> AppResult<String> {
    let ext = validate_extension(&file.filename, spec.allowed)?;
    let filename = unique_filename(&ext);
    let rel = relative_path(spec.category, &filename);

    let dir = config.upload_root.join("uploads").join(spec.category);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create upload directory: {e}")))?;

    let dest = dir.join(&filename);
    tokio::fs::write(&dest, &file.data)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to store uploaded file: {e}")))?;

    tracing::debug!(path = %rel, bytes = file.data.len(), "stored upload");
    Ok(rel)
}

/// Remove a stored upload by its relative path, after the owning row is
/// already gone. A missing file is not an error; anything else is logged and
/// swallowed so deletes stay idempotent.
pub async fn remove(config: &ServerConfig, stored_path: &str) {
    if !esports_core::images::is_allowed_path(stored_path) {
        tracing::warn!(path = %stored_path, "refusing to remove file outside upload dirs");
        return;
    }
    let full = resolve(config, stored_path);
    match tokio::fs::remove_file(&full).await {
        Ok(()) => tracing::debug!(path = %stored_path, "removed upload"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %stored_path, error = %e, "failed to remove upload"),
    }
}

/// Absolute filesystem path for a stored relative path.
pub fn resolve(config: &ServerConfig, stored_path: &str) -> PathBuf {
    config.upload_root.join(stored_path)
}
