//! Aggregated site statistics.

use serde::Serialize;
use sqlx::FromRow;

/// Row counts per resource plus the summed prize pool, computed in a single
/// aggregate query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteStats {
    pub tournaments: i64,
    pub events: i64,
    pub committee_members: i64,
    pub gallery_items: i64,
    pub sponsors: i64,
    pub achievements: i64,
    pub total_prize_pool: i64,
}
