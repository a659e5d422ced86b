//! Gallery item entity model and DTOs.

use esports_core::error::CoreError;
use esports_core::types::{DbId, Timestamp};
use esports_core::validation::{require, require_str};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::double_option;

/// A row from the `gallery_items` table. `image_url` and `video_url` are
/// independently optional: an item may be a photo, a clip, or both.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub category: String,
    pub year: i32,
    pub tags: Option<serde_json::Value>,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gallery item. Required: `title`, `category`, `year`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub tags: Option<serde_json::Value>,
    pub is_featured: Option<bool>,
}

impl CreateGalleryItem {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_str("title", &self.title)?;
        require_str("category", &self.category)?;
        require("year", &self.year)?;
        Ok(())
    }
}

/// DTO for updating a gallery item. All fields optional; presence wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGalleryItem {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub tags: Option<Option<serde_json::Value>>,
    pub is_featured: Option<bool>,
}

impl UpdateGalleryItem {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.year.is_none()
            && self.tags.is_none()
            && self.is_featured.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_featured_false_counts_as_present() {
        let input: UpdateGalleryItem =
            serde_json::from_str(r#"{"is_featured": false}"#).unwrap();
        assert_eq!(input.is_featured, Some(false));
        assert!(!input.is_empty());
    }

    #[test]
    fn empty_title_on_create_counts_as_missing() {
        let input = CreateGalleryItem {
            title: Some(String::new()),
            description: None,
            category: Some("tournaments".into()),
            year: Some(2026),
            tags: None,
            is_featured: None,
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "Field 'title' is required");
    }
}
