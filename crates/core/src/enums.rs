//! Fixed enumerated-value tables for resource fields.
//!
//! Stored as plain text columns; these constants are the single source of
//! truth for what values are accepted. Validation happens in request
//! handling, not in the database schema, so the allowed sets can evolve
//! without a migration.

/// Tournament lifecycle states. Applied as a default on create and
/// validated on update.
pub const TOURNAMENT_STATUSES: &[&str] = &["upcoming", "ongoing", "completed", "cancelled"];

/// Status assigned to a tournament created without an explicit status.
pub const DEFAULT_TOURNAMENT_STATUS: &str = "upcoming";

/// Sponsor partnership tiers.
pub const PARTNERSHIP_TYPES: &[&str] = &["platinum", "gold", "silver", "bronze"];

/// Achievement categories.
pub const ACHIEVEMENT_CATEGORIES: &[&str] = &["tournament", "individual", "team", "community"];

/// Countdown display granularities.
pub const COUNTDOWN_TYPES: &[&str] = &["days", "hours", "minutes", "seconds"];

/// Granularity assigned to a countdown created without an explicit type.
pub const DEFAULT_COUNTDOWN_TYPE: &str = "days";

/// User roles recognised by the auth gate.
pub const USER_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MODERATOR];

/// Role with full access, including user management and site settings.
pub const ROLE_ADMIN: &str = "admin";

/// Role assigned to new accounts by default. Can manage content but not
/// users or site settings.
pub const ROLE_MODERATOR: &str = "moderator";
