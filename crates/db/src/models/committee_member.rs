//! Committee member entity model and DTOs.

use esports_core::error::CoreError;
use esports_core::types::{DbId, Timestamp};
use esports_core::validation::{require, require_str};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::double_option;

/// A row from the `committee_members` table. `social_links` is free-form
/// JSON supplied by the frontend (platform name -> profile URL).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommitteeMember {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub position: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub achievements: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub is_current: bool,
    pub year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a committee member. Required: `name`, `role`,
/// `position`, `year`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommitteeMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub achievements: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub is_current: Option<bool>,
    pub year: Option<i32>,
}

impl CreateCommitteeMember {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_str("name", &self.name)?;
        require_str("role", &self.role)?;
        require_str("position", &self.position)?;
        require("year", &self.year)?;
        Ok(())
    }
}

/// DTO for updating a committee member. All fields optional; presence wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCommitteeMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub position: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub achievements: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub social_links: Option<Option<serde_json::Value>>,
    pub is_current: Option<bool>,
    pub year: Option<i32>,
}

impl UpdateCommitteeMember {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.position.is_none()
            && self.bio.is_none()
            && self.achievements.is_none()
            && self.social_links.is_none()
            && self.is_current.is_none()
            && self.year.is_none()
    }
}
