//! HTTP-level integration tests for the image-serving endpoint: path
//! policy, caching headers, and content types.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, get};
use sqlx::PgPool;

const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[sqlx::test(migrations = "../db/migrations")]
async fn serves_stored_file_with_cache_headers(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let gallery = dir.path().join("uploads/gallery");
    std::fs::create_dir_all(&gallery).unwrap();
    std::fs::write(gallery.join("a.png"), PNG_BYTES).unwrap();

    let app = common::build_test_app_with_root(pool, dir.path().to_path_buf());
    let response = get(app, "/api/v1/images/uploads/gallery/a.png").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers.get("content-type").unwrap(), "image/png");
    assert_eq!(
        headers.get("cache-control").unwrap(),
        "public, max-age=31536000, immutable"
    );
    assert_eq!(body_bytes(response).await, PNG_BYTES);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_file_returns_404(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_root(pool, dir.path().to_path_buf());
    let response = get(app, "/api/v1/images/uploads/gallery/missing.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn traversal_attempts_are_forbidden(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    // Plant a file outside the allowed tree; it must stay unreachable.
    std::fs::write(dir.path().join("secret.txt"), b"top secret").unwrap();

    let app = common::build_test_app_with_root(pool.clone(), dir.path().to_path_buf());
    let response = get(app, "/api/v1/images/uploads/gallery/../../secret.txt").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app_with_root(pool.clone(), dir.path().to_path_buf());
    let response = get(app, "/api/v1/images/secret.txt").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Only the fixed upload categories are servable.
    let app = common::build_test_app_with_root(pool, dir.path().to_path_buf());
    let response = get(app, "/api/v1/images/uploads/other/x.png").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn content_type_follows_extension(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let sponsors = dir.path().join("uploads/sponsors");
    std::fs::create_dir_all(&sponsors).unwrap();
    std::fs::write(sponsors.join("logo.svg"), b"<svg/>").unwrap();

    let app = common::build_test_app_with_root(pool, dir.path().to_path_buf());
    let response = get(app, "/api/v1/images/uploads/sponsors/logo.svg").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/svg+xml"
    );
}
