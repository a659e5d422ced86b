//! Domain layer shared by the database and API crates.
//!
//! Holds the error taxonomy, shared ID/timestamp types, enumerated-value
//! tables, request validation helpers, upload filename rules, and the image
//! URL resolver. Everything here is dependency-light and synchronous.

pub mod enums;
pub mod error;
pub mod images;
pub mod types;
pub mod uploads;
pub mod validation;
