//! HTTP-level integration tests for the countdown replace semantics.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, put_json};
use sqlx::PgPool;

fn countdown(text: &str) -> serde_json::Value {
    serde_json::json!({
        "status_text": text,
        "target_date": "2030-09-01T00:00:00Z",
        "show_countdown": true
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_with_no_countdown_returns_null_data(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/countdown").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn replace_deactivates_previous_rows(pool: PgPool) {
    let token = admin_token();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/v1/countdown", Some(&token), countdown("Season 1")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;
    assert_eq!(first["data"]["is_active"], true);
    assert_eq!(first["data"]["countdown_type"], "days");

    let app = common::build_test_app(pool.clone());
    put_json(app, "/api/v1/countdown", Some(&token), countdown("Season 2")).await;

    // Only the latest row is active.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/countdown").await).await;
    assert_eq!(json["data"]["status_text"], "Season 2");
    assert_eq!(json["data"]["is_active"], true);

    // History keeps both, newest first.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/countdown/history").await).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["status_text"], "Season 2");
    assert_eq!(rows[1]["is_active"], false);

    let active: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM countdown_settings WHERE is_active = true")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(active, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn replace_requires_status_text(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();
    let response = put_json(
        app,
        "/api/v1/countdown",
        Some(&token),
        serde_json::json!({"custom_message": "soon"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Field 'status_text' is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn replace_rejects_unknown_countdown_type(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = admin_token();
    let mut input = countdown("Soon");
    input["countdown_type"] = "fortnights".into();

    let response = put_json(app, "/api/v1/countdown", Some(&token), input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Invalid countdown_type. Must be one of: days, hours, minutes, seconds"
    );
}
