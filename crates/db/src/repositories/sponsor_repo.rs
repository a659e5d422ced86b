//! Repository for the `sponsors` table.

use esports_core::types::DbId;
use sqlx::PgPool;

use crate::models::sponsor::{CreateSponsor, Sponsor, UpdateSponsor};
use crate::update::UpdateBuilder;

const COLUMNS: &str = "id, name, logo_url, category, partnership_type, website_url, \
    benefits, is_active, created_at, updated_at";

/// Provides CRUD and filtered reads for sponsors.
pub struct SponsorRepo;

impl SponsorRepo {
    /// Insert a new sponsor, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSponsor,
        logo_url: Option<&str>,
    ) -> Result<Sponsor, sqlx::Error> {
        let query = format!(
            "INSERT INTO sponsors
                (name, logo_url, category, partnership_type, website_url,
                 benefits, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sponsor>(&query)
            .bind(&input.name)
            .bind(logo_url)
            .bind(&input.category)
            .bind(&input.partnership_type)
            .bind(&input.website_url)
            .bind(&input.benefits)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sponsor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sponsors WHERE id = $1");
        sqlx::query_as::<_, Sponsor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sponsors, tier first then name (the frontend's display
    /// order).
    pub async fn list(pool: &PgPool) -> Result<Vec<Sponsor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sponsors ORDER BY partnership_type ASC, name ASC"
        );
        sqlx::query_as::<_, Sponsor>(&query).fetch_all(pool).await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Sponsor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sponsors WHERE is_active = true
             ORDER BY partnership_type ASC, name ASC"
        );
        sqlx::query_as::<_, Sponsor>(&query).fetch_all(pool).await
    }

    /// List sponsors in one partnership tier, alphabetical.
    pub async fn list_by_tier(pool: &PgPool, tier: &str) -> Result<Vec<Sponsor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sponsors WHERE partnership_type = $1 ORDER BY name ASC"
        );
        sqlx::query_as::<_, Sponsor>(&query)
            .bind(tier)
            .fetch_all(pool)
            .await
    }

    /// Apply only the fields present in `input`. Returns `None` if no row
    /// matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSponsor,
        logo_url: Option<&str>,
    ) -> Result<Option<Sponsor>, sqlx::Error> {
        let mut b = UpdateBuilder::new("sponsors");
        if let Some(v) = &input.name {
            b.set("name", v.as_str());
        }
        if let Some(v) = &input.category {
            b.set("category", v.as_deref());
        }
        if let Some(v) = &input.partnership_type {
            b.set("partnership_type", v.as_str());
        }
        if let Some(v) = &input.website_url {
            b.set("website_url", v.as_deref());
        }
        if let Some(v) = &input.benefits {
            b.set("benefits", v.as_deref());
        }
        if let Some(v) = input.is_active {
            b.set("is_active", v);
        }
        if let Some(p) = logo_url {
            b.set("logo_url", p);
        }
        let mut qb = b.finish(id, COLUMNS);
        qb.build_query_as::<Sponsor>().fetch_optional(pool).await
    }

    /// Remove a sponsor row. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sponsors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
