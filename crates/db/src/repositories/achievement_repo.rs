//! Repository for the `achievements` table.

use esports_core::types::DbId;
use sqlx::PgPool;

use crate::models::achievement::{Achievement, CreateAchievement, UpdateAchievement};
use crate::update::UpdateBuilder;

const COLUMNS: &str = "id, title, description, category, year, icon_url, \
    highlights_url, created_at, updated_at";

/// Provides CRUD and filtered reads for achievements.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Insert a new achievement, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAchievement,
        icon_url: Option<&str>,
    ) -> Result<Achievement, sqlx::Error> {
        let query = format!(
            "INSERT INTO achievements
                (title, description, category, year, icon_url, highlights_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.year)
            .bind(icon_url)
            .bind(&input.highlights_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM achievements WHERE id = $1");
        sqlx::query_as::<_, Achievement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all achievements, newest year first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM achievements ORDER BY year DESC, id DESC");
        sqlx::query_as::<_, Achievement>(&query).fetch_all(pool).await
    }

    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements WHERE category = $1
             ORDER BY year DESC, id DESC"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_year(pool: &PgPool, year: i32) -> Result<Vec<Achievement>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM achievements WHERE year = $1 ORDER BY id DESC");
        sqlx::query_as::<_, Achievement>(&query)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    /// Apply only the fields present in `input`. Returns `None` if no row
    /// matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAchievement,
        icon_url: Option<&str>,
    ) -> Result<Option<Achievement>, sqlx::Error> {
        let mut b = UpdateBuilder::new("achievements");
        if let Some(v) = &input.title {
            b.set("title", v.as_str());
        }
        if let Some(v) = &input.description {
            b.set("description", v.as_deref());
        }
        if let Some(v) = &input.category {
            b.set("category", v.as_str());
        }
        if let Some(v) = input.year {
            b.set("year", v);
        }
        if let Some(v) = &input.highlights_url {
            b.set("highlights_url", v.as_deref());
        }
        if let Some(p) = icon_url {
            b.set("icon_url", p);
        }
        let mut qb = b.finish(id, COLUMNS);
        qb.build_query_as::<Achievement>().fetch_optional(pool).await
    }

    /// Remove an achievement row. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
