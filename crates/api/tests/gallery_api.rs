//! HTTP-level integration tests for the gallery endpoints, including
//! multipart uploads and image URL rewriting in responses.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete, get, post_json, send_multipart};
use sqlx::PgPool;

// Smallest valid PNG header; the server only checks the extension, but the
// bytes should survive the store/serve round trip untouched.
const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn valid_item(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "category": "tournaments",
        "year": 2026
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn multipart_create_stores_file_and_rewrites_url(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_root(pool, dir.path().to_path_buf());
    let token = admin_token();

    let response = send_multipart(
        app,
        "POST",
        "/api/v1/gallery",
        Some(&token),
        &valid_item("Finals crowd"),
        &[("image", "crowd.png", PNG_BYTES)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let image_url = json["data"]["image_url"].as_str().unwrap();
    // Stored relative path leaves the server as an absolute URL.
    assert!(
        image_url.starts_with("http://localhost:3000/api/v1/images/uploads/gallery/"),
        "unexpected image_url: {image_url}"
    );
    assert!(image_url.ends_with(".png"));

    // The file actually landed under the upload root.
    let stored = image_url
        .strip_prefix("http://localhost:3000/api/v1/images/")
        .unwrap();
    let on_disk = dir.path().join(stored);
    assert_eq!(std::fs::read(on_disk).unwrap(), PNG_BYTES);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn video_url_is_not_rewritten(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_root(pool, dir.path().to_path_buf());
    let token = admin_token();

    let response = send_multipart(
        app,
        "POST",
        "/api/v1/gallery",
        Some(&token),
        &valid_item("Clutch clip"),
        &[("video", "clutch.mp4", b"fake-video-bytes")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let video_url = json["data"]["video_url"].as_str().unwrap();
    // Video links are consumed raw by the frontend.
    assert!(
        video_url.starts_with("uploads/gallery/"),
        "video_url must stay relative, got: {video_url}"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn disallowed_extension_is_rejected(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_root(pool, dir.path().to_path_buf());
    let token = admin_token();

    let response = send_multipart(
        app,
        "POST",
        "/api/v1/gallery",
        Some(&token),
        &valid_item("Nice try"),
        &[("image", "shell.php", b"<?php")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Invalid file type. Allowed types: jpg, jpeg, png, gif, webp"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn multipart_without_data_field_still_validates(pool: PgPool) {
    // A file-only multipart deserializes the payload as {}, which then
    // fails required-field validation rather than erroring opaquely.
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app_with_root(pool, dir.path().to_path_buf());
    let token = admin_token();

    const BOUNDARY: &str = "X-INTEGRATION-TEST-BOUNDARY";
    let mut body: Vec<u8> = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\ncontent-disposition: form-data; \
             name=\"image\"; filename=\"a.png\"\r\n\
             content-type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(PNG_BYTES);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    use tower::ServiceExt;
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/gallery")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("authorization", format!("Bearer {token}"))
        .body(axum::body::Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Field 'title' is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_row_and_stored_files(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let token = admin_token();

    let app = common::build_test_app_with_root(pool.clone(), dir.path().to_path_buf());
    let created = body_json(
        send_multipart(
            app,
            "POST",
            "/api/v1/gallery",
            Some(&token),
            &valid_item("Ephemeral"),
            &[("image", "gone.png", PNG_BYTES)],
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();
    let stored = created["data"]["image_url"]
        .as_str()
        .unwrap()
        .strip_prefix("http://localhost:3000/api/v1/images/")
        .unwrap()
        .to_string();
    assert!(dir.path().join(&stored).exists());

    let app = common::build_test_app_with_root(pool.clone(), dir.path().to_path_buf());
    let response = delete(app, &format!("/api/v1/gallery/{id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Row first, then file.
    let app = common::build_test_app_with_root(pool, dir.path().to_path_buf());
    let response = get(app, &format!("/api/v1/gallery/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!dir.path().join(&stored).exists());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn category_and_year_filters(pool: PgPool) {
    let token = admin_token();
    let mut other = valid_item("Campus shoot");
    other["category"] = "events".into();
    other["year"] = 2025.into();

    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/gallery", Some(&token), valid_item("Bracket board")).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/gallery", Some(&token), other).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/gallery/category/events").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/gallery/year/2026").await).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Bracket board");
}
