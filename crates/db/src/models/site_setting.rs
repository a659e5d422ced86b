//! Site setting entity model and DTOs.
//!
//! Settings are key-addressed (`setting_key` is unique), not id-addressed.

use esports_core::error::CoreError;
use esports_core::types::{DbId, Timestamp};
use esports_core::validation::require_str;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::double_option;

/// A row from the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub id: DbId,
    pub setting_key: String,
    pub setting_value: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a setting. Required: `setting_key`, `setting_value`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSiteSetting {
    pub setting_key: Option<String>,
    pub setting_value: Option<String>,
    pub description: Option<String>,
}

impl CreateSiteSetting {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_str("setting_key", &self.setting_key)?;
        require_str("setting_value", &self.setting_value)?;
        Ok(())
    }
}

/// DTO for updating a setting by key. The key itself is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSiteSetting {
    pub setting_value: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl UpdateSiteSetting {
    pub fn is_empty(&self) -> bool {
        self.setting_value.is_none() && self.description.is_none()
    }
}
