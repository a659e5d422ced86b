//! Event entity model and DTOs.

use esports_core::error::CoreError;
use esports_core::types::{DbId, Timestamp};
use esports_core::validation::{require, require_str};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::double_option;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub event_date: Timestamp,
    pub location: Option<String>,
    pub event_type: String,
    pub is_featured: bool,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an event. Required: `title`, `event_date`,
/// `event_type`. The date must not be in the past at the moment the
/// request is validated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<Timestamp>,
    pub location: Option<String>,
    pub event_type: Option<String>,
    pub is_featured: Option<bool>,
    pub status: Option<String>,
}

impl CreateEvent {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.validate_at(chrono::Utc::now())
    }

    /// Validation with an injected "now" so the boundary is testable.
    /// Rejection is strictly `event_date < now`; a date exactly at `now`
    /// is accepted.
    pub fn validate_at(&self, now: Timestamp) -> Result<(), CoreError> {
        require_str("title", &self.title)?;
        let event_date = require("event_date", &self.event_date)?;
        require_str("event_type", &self.event_type)?;
        if event_date < now {
            return Err(CoreError::Validation(
                "Event date cannot be in the past".into(),
            ));
        }
        Ok(())
    }
}

/// DTO for updating an event. All fields optional; presence wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub event_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    pub event_type: Option<String>,
    pub is_featured: Option<bool>,
    pub status: Option<String>,
}

impl UpdateEvent {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.event_date.is_none()
            && self.location.is_none()
            && self.event_type.is_none()
            && self.is_featured.is_none()
            && self.status.is_none()
    }
}
