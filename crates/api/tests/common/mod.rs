//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the same router the production binary runs (via
//! `build_app_router`) and drives it with `tower::ServiceExt::oneshot`, no
//! TCP listener involved.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use esports_api::auth::jwt::{generate_access_token, JwtConfig};
use esports_api::config::ServerConfig;
use esports_api::router::build_app_router;
use esports_api::state::AppState;

const TEST_JWT_SECRET: &str = "integration-test-secret-do-not-use";

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 60,
    }
}

/// Build a test `ServerConfig` with safe defaults and the given upload root.
pub fn test_config(upload_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_base_url: "http://localhost:3000".to_string(),
        upload_root,
        expose_db_errors: false,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Uploads land in the system temp directory; tests
/// that assert on stored files should use [`build_test_app_with_root`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_root(pool, std::env::temp_dir())
}

/// Same as [`build_test_app`] but with an explicit upload root, so tests
/// can point it at a `tempfile::TempDir` and inspect what gets written.
pub fn build_test_app_with_root(pool: PgPool, upload_root: PathBuf) -> Router {
    let config = test_config(upload_root);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A Bearer token with the admin role, signed with the test secret.
///
/// Handlers trust the role claim, so no user row is needed except for
/// `/auth/me`.
pub fn admin_token() -> String {
    generate_access_token(1, "admin", &test_jwt_config()).unwrap()
}

/// A Bearer token with the moderator role.
pub fn moderator_token() -> String {
    generate_access_token(2, "moderator", &test_jwt_config()).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, "POST", uri, token, body).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, "PUT", uri, token, body).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

async fn json_request(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// A file to attach to a multipart request: (field name, filename, bytes).
pub type MultipartFile<'a> = (&'a str, &'a str, &'a [u8]);

/// Send a multipart request carrying a JSON `data` field plus file fields,
/// the shape the create/update endpoints accept for uploads.
pub async fn send_multipart(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    data: &serde_json::Value,
    files: &[MultipartFile<'_>],
) -> Response<Body> {
    const BOUNDARY: &str = "X-INTEGRATION-TEST-BOUNDARY";

    let mut body: Vec<u8> = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\ncontent-disposition: form-data; name=\"data\"\r\n\r\n{data}\r\n"
        )
        .as_bytes(),
    );
    for (field, filename, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\ncontent-disposition: form-data; \
                 name=\"{field}\"; filename=\"{filename}\"\r\n\
                 content-type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder().method(method).uri(uri).header(
        "content-type",
        format!("multipart/form-data; boundary={BOUNDARY}"),
    );
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body)).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
