use crate::types::DbId;

/// Domain-level error taxonomy shared by all layers.
///
/// The API crate maps each variant onto an HTTP status and the standard
/// response envelope.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// An entity lookup by key found nothing (key-addressed resources).
    #[error("{entity} '{key}' not found")]
    KeyNotFound { entity: &'static str, key: String },

    /// Request input failed validation (missing field, bad enum value,
    /// bad date ordering, disallowed upload extension).
    #[error("{0}")]
    Validation(String),

    /// The request conflicts with existing state (duplicate key, etc.).
    #[error("{0}")]
    Conflict(String),

    /// Authentication is missing or invalid.
    #[error("{0}")]
    Unauthorized(String),

    /// The authenticated caller lacks the required role.
    #[error("{0}")]
    Forbidden(String),

    /// Something went wrong internally; details belong in logs, not responses.
    #[error("{0}")]
    Internal(String),
}
