//! Repository for the `gallery_items` table.

use esports_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use crate::update::UpdateBuilder;

const COLUMNS: &str = "id, title, description, image_url, video_url, category, \
    year, tags, is_featured, created_at, updated_at";

/// Provides CRUD and filtered reads for gallery items.
pub struct GalleryRepo;

impl GalleryRepo {
    /// Insert a new gallery item, returning the created row. Image and
    /// video paths are independently optional.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryItem,
        image_url: Option<&str>,
        video_url: Option<&str>,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_items
                (title, description, image_url, video_url, category, year,
                 tags, is_featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(image_url)
            .bind(video_url)
            .bind(&input.category)
            .bind(input.year)
            .bind(&input.tags)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE id = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all gallery items, newest year first.
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items ORDER BY year DESC, id DESC");
        sqlx::query_as::<_, GalleryItem>(&query).fetch_all(pool).await
    }

    pub async fn list_featured(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_items WHERE is_featured = true
             ORDER BY year DESC, id DESC"
        );
        sqlx::query_as::<_, GalleryItem>(&query).fetch_all(pool).await
    }

    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_items WHERE category = $1
             ORDER BY year DESC, id DESC"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_year(pool: &PgPool, year: i32) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM gallery_items WHERE year = $1 ORDER BY id DESC");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    /// Apply only the fields present in `input`. Returns `None` if no row
    /// matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryItem,
        image_url: Option<&str>,
        video_url: Option<&str>,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let mut b = UpdateBuilder::new("gallery_items");
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
        if let Some(v) = &input.tags {
            b.set("tags", v.as_ref());
        }
        if let Some(v) = input.is_featured {
            b.set("is_featured", v);
        }
        if let Some(p) = image_url {
            b.set("image_url", p);
        }
        if let Some(p) = video_url {
            b.set("video_url", p);
        }
        let mut qb = b.finish(id, COLUMNS);
        qb.build_query_as::<GalleryItem>().fetch_optional(pool).await
    }

    /// Remove a gallery item row. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
