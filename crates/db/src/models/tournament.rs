//! Tournament entity model and DTOs.

use esports_core::enums::{DEFAULT_TOURNAMENT_STATUS, TOURNAMENT_STATUSES};
use esports_core::error::CoreError;
use esports_core::types::{DbId, Timestamp};
use esports_core::validation::{require, require_str, validate_enum};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::double_option;

/// A row from the `tournaments` table.
///
/// `game_name` and `genre` are constant SELECT literals, not a join: the
/// games catalog was retired upstream and every tournament reports
/// "Unknown Game" / "Unknown" (see DESIGN.md).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tournament {
    pub id: DbId,
    pub game_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub prize_pool: Option<i64>,
    pub max_participants: Option<i32>,
    pub current_participants: i32,
    pub status: String,
    pub game_name: String,
    pub genre: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tournament. Required: `game_id`, `name`,
/// `start_date`, `end_date`. Status defaults to `upcoming` and is not
/// validated on create.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTournament {
    pub game_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub prize_pool: Option<i64>,
    pub max_participants: Option<i32>,
    pub status: Option<String>,
}

impl CreateTournament {
    /// Required-field and date-ordering checks. Fails fast on the first
    /// missing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("game_id", &self.game_id)?;
        require_str("name", &self.name)?;
        let start = require("start_date", &self.start_date)?;
        let end = require("end_date", &self.end_date)?;
        if end <= start {
            return Err(CoreError::Validation(
                "End date must be after start date".into(),
            ));
        }
        Ok(())
    }

    /// Status to persist: the supplied value or the default.
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_TOURNAMENT_STATUS)
    }
}

/// DTO for updating a tournament. All fields optional; presence wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTournament {
    pub game_id: Option<DbId>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "double_option")]
    pub prize_pool: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub max_participants: Option<Option<i32>>,
    pub current_participants: Option<i32>,
    pub status: Option<String>,
}

impl UpdateTournament {
    /// Enum check for fields that are present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(status) = &self.status {
            validate_enum("status", status, TOURNAMENT_STATUSES)?;
        }
        Ok(())
    }

    /// True when no recognized field is present in the input.
    pub fn is_empty(&self) -> bool {
        self.game_id.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.prize_pool.is_none()
            && self.max_participants.is_none()
            && self.current_participants.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn valid_create() -> CreateTournament {
        CreateTournament {
            game_id: Some(1),
            name: Some("Spring Invitational".into()),
            description: None,
            start_date: Some(Utc::now()),
            end_date: Some(Utc::now() + Duration::days(2)),
            prize_pool: None,
            max_participants: None,
            status: None,
        }
    }

    #[test]
    fn end_date_must_be_after_start_date() {
        let mut input = valid_create();
        input.end_date = input.start_date;
        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "End date must be after start date");
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut input = valid_create();
        input.game_id = None;
        input.name = None;
        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "Field 'game_id' is required");
    }

    #[test]
    fn status_defaults_to_upcoming() {
        assert_eq!(valid_create().status_or_default(), "upcoming");
    }

    #[test]
    fn explicit_null_counts_as_present_in_update() {
        let input: UpdateTournament =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(input.description, Some(None));
        assert!(!input.is_empty());
    }

    #[test]
    fn absent_keys_leave_update_empty() {
        let input: UpdateTournament = serde_json::from_str("{}").unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn update_rejects_unknown_status() {
        let input: UpdateTournament =
            serde_json::from_str(r#"{"status": "paused"}"#).unwrap();
        let err = input.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid status. Must be one of: upcoming, ongoing, completed, cancelled"
        );
    }
}
