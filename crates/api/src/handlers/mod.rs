//! One handler module per resource. All handlers return the standard
//! response envelope; errors surface through [`crate::error::AppError`].

pub mod achievements;
pub mod auth;
pub mod committee;
pub mod countdown;
pub mod events;
pub mod gallery;
pub mod images;
pub mod settings;
pub mod sponsors;
pub mod stats;
pub mod tournaments;
