//! User entity model and DTOs backing the auth gate.

use esports_core::enums::USER_ROLES;
use esports_core::error::CoreError;
use esports_core::types::{DbId, Timestamp};
use esports_core::validation::{require_str, validate_enum};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table. The password hash never leaves the server.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for registering a user (admin only). Required: `username`, `email`,
/// `password`. Role defaults to `moderator`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl RegisterUser {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_str("username", &self.username)?;
        require_str("email", &self.email)?;
        require_str("password", &self.password)?;
        if let Some(role) = &self.role {
            validate_enum("role", role, USER_ROLES)?;
        }
        Ok(())
    }

    pub fn role_or_default(&self) -> &str {
        self.role.as_deref().unwrap_or("moderator")
    }
}
