//! Entity models and create/update DTOs.
//!
//! Update DTOs distinguish three states per field:
//! - key absent            -> leave the column alone
//! - key present with value -> overwrite (even with `""`, `0`, or `false`)
//! - key present with null  -> overwrite a nullable column with NULL
//!
//! Non-nullable columns use `Option<T>`; nullable columns use
//! `Option<Option<T>>` with the [`double_option`] deserializer so an
//! explicit JSON `null` is distinguishable from an absent key.

pub mod achievement;
pub mod committee_member;
pub mod countdown_setting;
pub mod event;
pub mod gallery_item;
pub mod site_setting;
pub mod sponsor;
pub mod stats;
pub mod tournament;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializer for `Option<Option<T>>` fields: maps JSON `null` to
/// `Some(None)` instead of `None`, so presence survives deserialization.
/// Combine with `#[serde(default)]` so an absent key stays `None`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
