//! Sponsor entity model and DTOs.

use esports_core::enums::PARTNERSHIP_TYPES;
use esports_core::error::CoreError;
use esports_core::types::{DbId, Timestamp};
use esports_core::validation::{require_str, validate_enum};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::double_option;

/// A row from the `sponsors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sponsor {
    pub id: DbId,
    pub name: String,
    pub logo_url: Option<String>,
    pub category: Option<String>,
    pub partnership_type: String,
    pub website_url: Option<String>,
    pub benefits: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a sponsor. Required: `name`, `partnership_type`
/// (validated against the tier set).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSponsor {
    pub name: Option<String>,
    pub category: Option<String>,
    pub partnership_type: Option<String>,
    pub website_url: Option<String>,
    pub benefits: Option<String>,
    pub is_active: Option<bool>,
}

impl CreateSponsor {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_str("name", &self.name)?;
        let tier = require_str("partnership_type", &self.partnership_type)?;
        validate_enum("partnership_type", tier, PARTNERSHIP_TYPES)?;
        Ok(())
    }
}

/// DTO for updating a sponsor. All fields optional; presence wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSponsor {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub category: Option<Option<String>>,
    pub partnership_type: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub website_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub benefits: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UpdateSponsor {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(tier) = &self.partnership_type {
            validate_enum("partnership_type", tier, PARTNERSHIP_TYPES)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.partnership_type.is_none()
            && self.website_url.is_none()
            && self.benefits.is_none()
            && self.is_active.is_none()
    }
}
