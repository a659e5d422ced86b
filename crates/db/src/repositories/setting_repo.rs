//! Repository for the `site_settings` table (key-addressed).

use sqlx::PgPool;

use crate::models::site_setting::{CreateSiteSetting, SiteSetting, UpdateSiteSetting};
use crate::update::UpdateBuilder;

const COLUMNS: &str = "id, setting_key, setting_value, description, created_at, updated_at";

/// Provides CRUD for site settings. Rows are addressed by `setting_key`,
/// never by id; key uniqueness is enforced by the `uq_site_settings_key`
/// constraint and surfaces as a conflict.
pub struct SettingRepo;

impl SettingRepo {
    /// Insert a new setting, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSiteSetting,
    ) -> Result<SiteSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (setting_key, setting_value, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(&input.setting_key)
            .bind(&input.setting_value)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_key(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE setting_key = $1");
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// List all settings, ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings ORDER BY setting_key ASC");
        sqlx::query_as::<_, SiteSetting>(&query).fetch_all(pool).await
    }

    /// Apply only the fields present in `input` to the row with this key.
    /// Returns `None` if no row matched.
    pub async fn update_by_key(
        pool: &PgPool,
        key: &str,
        input: &UpdateSiteSetting,
    ) -> Result<Option<SiteSetting>, sqlx::Error> {
        let mut b = UpdateBuilder::new("site_settings");
        if let Some(v) = &input.setting_value {
            b.set("setting_value", v.as_str());
        }
        if let Some(v) = &input.description {
            b.set("description", v.as_deref());
        }
        b.set("updated_at", chrono::Utc::now());
        let mut qb = b.finish_where("setting_key", key, COLUMNS);
        qb.build_query_as::<SiteSetting>().fetch_optional(pool).await
    }

    /// Remove a setting by key. Returns `true` if a row was deleted.
    pub async fn delete_by_key(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_settings WHERE setting_key = $1")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
