//! Countdown setting entity model and DTO.
//!
//! Countdown rows are append-only history: "updating" the countdown
//! deactivates every prior row and inserts a fresh one, so at most one row
//! ever has `is_active = true`.

use esports_core::enums::{COUNTDOWN_TYPES, DEFAULT_COUNTDOWN_TYPE};
use esports_core::error::CoreError;
use esports_core::types::{DbId, Timestamp};
use esports_core::validation::{require_str, validate_enum};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `countdown_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CountdownSetting {
    pub id: DbId,
    pub status_text: String,
    pub custom_message: Option<String>,
    pub target_date: Option<Timestamp>,
    pub is_active: bool,
    pub show_countdown: bool,
    pub countdown_type: String,
    pub created_at: Timestamp,
}

/// DTO for replacing the active countdown. Required: `status_text`.
/// `countdown_type` defaults to `days` and is validated when supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceCountdown {
    pub status_text: Option<String>,
    pub custom_message: Option<String>,
    pub target_date: Option<Timestamp>,
    pub show_countdown: Option<bool>,
    pub countdown_type: Option<String>,
}

impl ReplaceCountdown {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_str("status_text", &self.status_text)?;
        if let Some(countdown_type) = &self.countdown_type {
            validate_enum("countdown_type", countdown_type, COUNTDOWN_TYPES)?;
        }
        Ok(())
    }

    pub fn countdown_type_or_default(&self) -> &str {
        self.countdown_type
            .as_deref()
            .unwrap_or(DEFAULT_COUNTDOWN_TYPE)
    }
}
