//! Repository for the `committee_members` table.

use esports_core::types::DbId;
use sqlx::PgPool;

use crate::models::committee_member::{
    CommitteeMember, CreateCommitteeMember, UpdateCommitteeMember,
};
use crate::update::UpdateBuilder;

const COLUMNS: &str = "id, name, role, position, image_url, bio, achievements, \
    social_links, is_current, year, created_at, updated_at";

/// Provides CRUD and filtered reads for committee members.
pub struct CommitteeRepo;

impl CommitteeRepo {
    /// Insert a new committee member, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommitteeMember,
        image_url: Option<&str>,
    ) -> Result<CommitteeMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO committee_members
                (name, role, position, image_url, bio, achievements,
                 social_links, is_current, year)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, true), $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommitteeMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.position)
            .bind(image_url)
            .bind(&input.bio)
            .bind(&input.achievements)
            .bind(&input.social_links)
            .bind(input.is_current)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CommitteeMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM committee_members WHERE id = $1");
        sqlx::query_as::<_, CommitteeMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all members, newest committee year first, alphabetical within a
    /// year.
    pub async fn list(pool: &PgPool) -> Result<Vec<CommitteeMember>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM committee_members ORDER BY year DESC, name ASC");
        sqlx::query_as::<_, CommitteeMember>(&query)
            .fetch_all(pool)
            .await
    }

    /// List members of the sitting committee.
    pub async fn list_current(pool: &PgPool) -> Result<Vec<CommitteeMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM committee_members WHERE is_current = true
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, CommitteeMember>(&query)
            .fetch_all(pool)
            .await
    }

    /// List members for one committee year.
    pub async fn list_by_year(
        pool: &PgPool,
        year: i32,
    ) -> Result<Vec<CommitteeMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM committee_members WHERE year = $1 ORDER BY name ASC"
        );
        sqlx::query_as::<_, CommitteeMember>(&query)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    /// Apply only the fields present in `input`. Returns `None` if no row
    /// matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCommitteeMember,
        image_url: Option<&str>,
    ) -> Result<Option<CommitteeMember>, sqlx::Error> {
        let mut b = UpdateBuilder::new("committee_members");
        if let Some(v) = &input.name {
            b.set("name", v.as_str());
        }
        if let Some(v) = &input.role {
            b.set("role", v.as_str());
        }
        if let Some(v) = &input.position {
            b.set("position", v.as_str());
        }
        if let Some(v) = &input.bio {
            b.set("bio", v.as_deref());
        }
        if let Some(v) = &input.achievements {
            b.set("achievements", v.as_deref());
        }
        if let Some(v) = &input.social_links {
            b.set("social_links", v.as_ref());
        }
        if let Some(v) = input.is_current {
            b.set("is_current", v);
        }
        if let Some(v) = input.year {
            b.set("year", v);
        }
        if let Some(p) = image_url {
            b.set("image_url", p);
        }
        let mut qb = b.finish(id, COLUMNS);
        qb.build_query_as::<CommitteeMember>()
            .fetch_optional(pool)
            .await
    }

    /// Remove a committee member row. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM committee_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
