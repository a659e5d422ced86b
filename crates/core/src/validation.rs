//! Request validation helpers shared by every resource's create/update path.
//!
//! Create-path rule: a required field that is absent OR empty fails with
//! `"Field '<name>' is required"`. Update-path rule: presence of a key is
//! intent to overwrite, so these helpers are only used for fields that must
//! be present; enum checks apply on both paths whenever the field is present.

use crate::error::CoreError;

/// Require a string field to be present and non-empty (whitespace-only
/// counts as empty). Returns the trimmed-length-checked original value.
pub fn require_str<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.as_str()),
        _ => Err(missing(field)),
    }
}

/// Require a numeric field to be present.
pub fn require<T: Copy>(field: &str, value: &Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| missing(field))
}

/// Validate a value against a fixed allowed set.
///
/// Comparison is case-sensitive: the stored values and the frontend
/// filters both use the lowercase canonical spelling.
pub fn validate_enum(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Invalid {field}. Must be one of: {}",
        allowed.join(", ")
    )))
}

fn missing(field: &str) -> CoreError {
    CoreError::Validation(format!("Field '{field}' is required"))
}
