//! HTTP-level integration tests for the key-addressed settings endpoints
//! and their admin gating.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete, get, moderator_token, post_json, put_json};
use sqlx::PgPool;

fn setting(key: &str, value: &str) -> serde_json::Value {
    serde_json::json!({
        "setting_key": key,
        "setting_value": value,
        "description": "test setting"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_get_update_delete_by_key(pool: PgPool) {
    let token = admin_token();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/settings",
        Some(&token),
        setting("homepage_banner", "Welcome!"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/settings/homepage_banner").await).await;
    assert_eq!(json["data"]["setting_value"], "Welcome!");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/settings/homepage_banner",
        Some(&token),
        serde_json::json!({"setting_value": "Finals week!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["setting_value"], "Finals week!");
    // Key is immutable and untouched.
    assert_eq!(json["data"]["setting_key"], "homepage_banner");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/v1/settings/homepage_banner", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/settings/homepage_banner").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Setting 'homepage_banner' not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_key_returns_409(pool: PgPool) {
    let token = admin_token();
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/settings", Some(&token), setting("dup", "a")).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/settings", Some(&token), setting("dup", "b")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mutations_require_admin_role(pool: PgPool) {
    let token = moderator_token();
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/settings", Some(&token), setting("x", "y")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Admin role required");

    // Reads stay public.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/settings").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_update_is_rejected(pool: PgPool) {
    let token = admin_token();
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/settings", Some(&token), setting("k", "v")).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/settings/k",
        Some(&token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No fields to update");
}
