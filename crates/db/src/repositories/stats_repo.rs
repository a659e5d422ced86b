//! Aggregate statistics across all content tables.

use sqlx::PgPool;

use crate::models::stats::SiteStats;

pub struct StatsRepo;

impl StatsRepo {
    /// Row counts per resource plus the total prize pool, in one round
    /// trip. `SUM` over BIGINT yields NUMERIC in PostgreSQL, hence the
    /// explicit cast back.
    pub async fn site_stats(pool: &PgPool) -> Result<SiteStats, sqlx::Error> {
        sqlx::query_as::<_, SiteStats>(
            "SELECT
                (SELECT COUNT(*) FROM tournaments) AS tournaments,
                (SELECT COUNT(*) FROM events) AS events,
                (SELECT COUNT(*) FROM committee_members) AS committee_members,
                (SELECT COUNT(*) FROM gallery_items) AS gallery_items,
                (SELECT COUNT(*) FROM sponsors) AS sponsors,
                (SELECT COUNT(*) FROM achievements) AS achievements,
                (SELECT COALESCE(SUM(prize_pool), 0)::BIGINT FROM tournaments)
                    AS total_prize_pool",
        )
        .fetch_one(pool)
        .await
    }
}
