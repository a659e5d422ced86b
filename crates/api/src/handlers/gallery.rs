//! Handlers for the `/gallery` resource.
//!
//! Gallery items can carry an image, a video, or both; the two files arrive
//! under separate multipart fields and are stored independently.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use esports_core::error::CoreError;
use esports_core::types::DbId;
use esports_db::models::gallery_item::{CreateGalleryItem, UpdateGalleryItem};
use esports_db::repositories::GalleryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonOrMultipart;
use crate::middleware::rbac::RequireAuth;
use crate::response::{self, ApiResponse};
use crate::state::AppState;
use crate::uploads::{self, GALLERY_IMAGE, GALLERY_VIDEO};

/// GET /api/v1/gallery
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = GalleryRepo::list(&state.pool).await?;
    response::ok(&state, rows, "Gallery items retrieved successfully")
}

/// GET /api/v1/gallery/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Gallery item", id))?;
    response::ok(&state, row, "Gallery item retrieved successfully")
}

/// GET /api/v1/gallery/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<ApiResponse>> {
    let rows = GalleryRepo::list_featured(&state.pool).await?;
    response::ok(&state, rows, "Gallery items retrieved successfully")
}

/// GET /api/v1/gallery/category/{category}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ApiResponse>> {
    let rows = GalleryRepo::list_by_category(&state.pool, &category).await?;
    response::ok(&state, rows, "Gallery items retrieved successfully")
}

/// GET /api/v1/gallery/year/{year}
pub async fn list_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> AppResult<Json<ApiResponse>> {
    let rows = GalleryRepo::list_by_year(&state.pool, year).await?;
    response::ok(&state, rows, "Gallery items retrieved successfully")
}

/// POST /api/v1/gallery
///
/// Accepts JSON or multipart with optional `image` and `video` files.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    body: JsonOrMultipart<CreateGalleryItem>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    body.payload.validate()?;

    let mut image_url = None;
    if let Some(file) = body.file(GALLERY_IMAGE.field) {
        image_url = Some(uploads::store(&state.config, &GALLERY_IMAGE, file).await?);
    }
    let mut video_url = None;
    if let Some(file) = body.file(GALLERY_VIDEO.field) {
        video_url = Some(uploads::store(&state.config, &GALLERY_VIDEO, file).await?);
    }

    let row = GalleryRepo::create(
        &state.pool,
        &body.payload,
        image_url.as_deref(),
        video_url.as_deref(),
    )
    .await?;
    response::created(&state, row, "Gallery item created successfully")
}

/// PUT /api/v1/gallery/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    body: JsonOrMultipart<UpdateGalleryItem>,
) -> AppResult<Json<ApiResponse>> {
    let image_file = body.file(GALLERY_IMAGE.field);
    let video_file = body.file(GALLERY_VIDEO.field);
    if body.payload.is_empty() && image_file.is_none() && video_file.is_none() {
        return Err(CoreError::Validation("No fields to update".into()).into());
    }

    GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Gallery item", id))?;

    let mut image_url = None;
    if let Some(file) = image_file {
        image_url = Some(uploads::store(&state.config, &GALLERY_IMAGE, file).await?);
    }
    let mut video_url = None;
    if let Some(file) = video_file {
        video_url = Some(uploads::store(&state.config, &GALLERY_VIDEO, file).await?);
    }

    let row = GalleryRepo::update(
        &state.pool,
        id,
        &body.payload,
        image_url.as_deref(),
        video_url.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::not_found("Gallery item", id))?;

    response::ok(&state, row, "Gallery item updated successfully")
}

/// DELETE /api/v1/gallery/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse>> {
    let row = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Gallery item", id))?;

    if !GalleryRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Gallery item", id));
    }

    if let Some(path) = &row.image_url {
        uploads::remove(&state.config, path).await;
    }
    if let Some(path) = &row.video_url {
        uploads::remove(&state.config, path).await;
    }

    response::ok(
        &state,
        serde_json::Value::Null,
        "Gallery item deleted successfully",
    )
}
