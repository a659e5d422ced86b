//! Repository for the `countdown_settings` table.
//!
//! Countdown rows are append-only. Replacing the countdown runs
//! deactivate-all + insert inside one transaction so a crash can never
//! leave the table without exactly one active row after a replace.

use sqlx::PgPool;

use crate::models::countdown_setting::{CountdownSetting, ReplaceCountdown};

const COLUMNS: &str = "id, status_text, custom_message, target_date, is_active, \
    show_countdown, countdown_type, created_at";

pub struct CountdownRepo;

impl CountdownRepo {
    /// The currently active countdown, if any.
    pub async fn find_active(pool: &PgPool) -> Result<Option<CountdownSetting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM countdown_settings WHERE is_active = true
             ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, CountdownSetting>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Full countdown history, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CountdownSetting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM countdown_settings ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, CountdownSetting>(&query)
            .fetch_all(pool)
            .await
    }

    /// Deactivate every row, then insert the replacement as the single
    /// active one. Both statements run in one transaction.
    pub async fn replace_active(
        pool: &PgPool,
        input: &ReplaceCountdown,
    ) -> Result<CountdownSetting, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE countdown_settings SET is_active = false WHERE is_active = true")
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO countdown_settings
                (status_text, custom_message, target_date, is_active,
                 show_countdown, countdown_type)
             VALUES ($1, $2, $3, true, COALESCE($4, true), $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CountdownSetting>(&query)
            .bind(&input.status_text)
            .bind(&input.custom_message)
            .bind(input.target_date)
            .bind(input.show_countdown)
            .bind(input.countdown_type_or_default())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }
}
