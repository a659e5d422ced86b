//! Repository for the `tournaments` table.

use esports_core::types::DbId;
use sqlx::PgPool;

use crate::models::tournament::{CreateTournament, Tournament, UpdateTournament};
use crate::update::UpdateBuilder;

/// Column list shared across queries. The `game_name`/`genre` literals
/// reproduce the retired games-catalog join (see DESIGN.md).
const COLUMNS: &str = "id, game_id, name, description, poster_url, start_date, end_date, \
    prize_pool, max_participants, current_participants, status, \
    'Unknown Game' AS game_name, 'Unknown' AS genre, created_at, updated_at";

/// Provides CRUD and filtered reads for tournaments.
pub struct TournamentRepo;

impl TournamentRepo {
    /// Insert a new tournament, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTournament,
        poster_url: Option<&str>,
    ) -> Result<Tournament, sqlx::Error> {
        let query = format!(
            "INSERT INTO tournaments
                (game_id, name, description, poster_url, start_date, end_date,
                 prize_pool, max_participants, current_participants, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 0, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tournament>(&query)
            .bind(input.game_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(poster_url)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.prize_pool)
            .bind(input.max_participants)
            .bind(input.status_or_default())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tournament>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tournaments WHERE id = $1");
        sqlx::query_as::<_, Tournament>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tournaments, most recent start date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tournament>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tournaments ORDER BY start_date DESC, id DESC");
        sqlx::query_as::<_, Tournament>(&query).fetch_all(pool).await
    }

    /// List tournaments with an exact status, most recent start date first.
    pub async fn list_by_status(
        pool: &PgPool,
        status: &str,
    ) -> Result<Vec<Tournament>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tournaments WHERE status = $1
             ORDER BY start_date DESC, id DESC"
        );
        sqlx::query_as::<_, Tournament>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Apply only the fields present in `input` (plus a freshly stored
    /// poster path, if any). Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTournament,
        poster_url: Option<&str>,
    ) -> Result<Option<Tournament>, sqlx::Error> {
        let mut b = UpdateBuilder::new("tournaments");
        if let Some(v) = input.game_id {
            b.set("game_id", v);
        }
        if let Some(v) = &input.name {
            b.set("name", v.as_str());
        }
        if let Some(v) = &input.description {
            b.set("description", v.as_deref());
        }
        if let Some(v) = input.start_date {
            b.set("start_date", v);
        }
        if let Some(v) = input.end_date {
            b.set("end_date", v);
        }
        if let Some(v) = &input.prize_pool {
            b.set("prize_pool", *v);
        }
        if let Some(v) = &input.max_participants {
            b.set("max_participants", *v);
        }
        if let Some(v) = input.current_participants {
            b.set("current_participants", v);
        }
        if let Some(v) = &input.status {
            b.set("status", v.as_str());
        }
        if let Some(p) = poster_url {
            b.set("poster_url", p);
        }
        let mut qb = b.finish(id, COLUMNS);
        qb.build_query_as::<Tournament>().fetch_optional(pool).await
    }

    /// Remove a tournament row. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tournaments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
