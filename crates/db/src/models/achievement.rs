//! Achievement entity model and DTOs.

use esports_core::enums::ACHIEVEMENT_CATEGORIES;
use esports_core::error::CoreError;
use esports_core::types::{DbId, Timestamp};
use esports_core::validation::{require, require_str, validate_enum};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::double_option;

/// A row from the `achievements` table. `highlights_url` is an external
/// link (VOD, article) and is served raw, never rewritten.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub year: i32,
    pub icon_url: Option<String>,
    pub highlights_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an achievement. Required: `title`, `category`
/// (validated), `year`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAchievement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub highlights_url: Option<String>,
}

impl CreateAchievement {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_str("title", &self.title)?;
        let category = require_str("category", &self.category)?;
        validate_enum("category", category, ACHIEVEMENT_CATEGORIES)?;
        require("year", &self.year)?;
        Ok(())
    }
}

/// DTO for updating an achievement. All fields optional; presence wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAchievement {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub highlights_url: Option<Option<String>>,
}

impl UpdateAchievement {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(category) = &self.category {
            validate_enum("category", category, ACHIEVEMENT_CATEGORIES)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.year.is_none()
            && self.highlights_url.is_none()
    }
}
