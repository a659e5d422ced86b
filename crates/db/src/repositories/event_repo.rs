//! Repository for the `events` table.

use esports_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::update::UpdateBuilder;

const COLUMNS: &str = "id, title, description, poster_url, event_date, location, \
    event_type, is_featured, status, created_at, updated_at";

/// Provides CRUD and filtered reads for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvent,
        poster_url: Option<&str>,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (title, description, poster_url, event_date, location,
                 event_type, is_featured, status)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, false), COALESCE($8, 'upcoming'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(poster_url)
            .bind(input.event_date)
            .bind(&input.location)
            .bind(&input.event_type)
            .bind(input.is_featured)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all events, most recent date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY event_date DESC, id DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// List featured events, most recent date first.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events WHERE is_featured = true
             ORDER BY event_date DESC, id DESC"
        );
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// List events whose date has not passed, soonest first.
    pub async fn list_upcoming(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events WHERE event_date >= NOW()
             ORDER BY event_date ASC, id ASC"
        );
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// List events with an exact type, most recent date first.
    pub async fn list_by_type(pool: &PgPool, event_type: &str) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events WHERE event_type = $1
             ORDER BY event_date DESC, id DESC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_type)
            .fetch_all(pool)
            .await
    }

    /// Apply only the fields present in `input`. Returns `None` if no row
    /// matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
        poster_url: Option<&str>,
    ) -> Result<Option<Event>, sqlx::Error> {
        let mut b = UpdateBuilder::new("events");
        if let Some(v) = &input.title {
            b.set("title", v.as_str());
        }
        if let Some(v) = &input.description {
            b.set("description", v.as_deref());
        }
        if let Some(v) = input.event_date {
            b.set("event_date", v);
        }
        if let Some(v) = &input.location {
            b.set("location", v.as_deref());
        }
        if let Some(v) = &input.event_type {
            b.set("event_type", v.as_str());
        }
        if let Some(v) = input.is_featured {
            b.set("is_featured", v);
        }
        if let Some(v) = &input.status {
            b.set("status", v.as_str());
        }
        if let Some(p) = poster_url {
            b.set("poster_url", p);
        }
        let mut qb = b.finish(id, COLUMNS);
        qb.build_query_as::<Event>().fetch_optional(pool).await
    }

    /// Remove an event row. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
