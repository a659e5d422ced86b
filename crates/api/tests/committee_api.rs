//! HTTP-level integration tests for the committee and achievement filters.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, post_json};
use sqlx::PgPool;

fn member(name: &str, year: i32, is_current: bool) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "role": "Officer",
        "position": "Events Lead",
        "year": year,
        "is_current": is_current,
        "social_links": {"discord": "https://discord.gg/example"}
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn current_filter_returns_sitting_committee(pool: PgPool) {
    let token = admin_token();
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/committee", Some(&token), member("Alice", 2026, true)).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/committee", Some(&token), member("Bob", 2024, false)).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/committee/current").await).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Alice");
    // Free-form social links survive the round trip.
    assert_eq!(
        rows[0]["social_links"]["discord"],
        "https://discord.gg/example"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn year_filter_is_alphabetical(pool: PgPool) {
    let token = admin_token();
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/committee", Some(&token), member("Zoe", 2025, false)).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/committee", Some(&token), member("Adam", 2025, false)).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/committee/year/2025").await).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Adam");
    assert_eq!(rows[1]["name"], "Zoe");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn achievement_category_is_validated_and_filterable(pool: PgPool) {
    let token = admin_token();
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/achievements",
        Some(&token),
        serde_json::json!({
            "title": "Regional champions",
            "category": "team",
            "year": 2025,
            "highlights_url": "https://youtube.com/watch?v=abc"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    // External highlight links are never rewritten.
    assert_eq!(
        created["data"]["highlights_url"],
        "https://youtube.com/watch?v=abc"
    );

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/achievements/category/cooking").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/achievements/category/team").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
