//! HTTP-level integration tests for login, registration, and password reset.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, moderator_token, post_json};
use sqlx::PgPool;

async fn register_user(pool: &PgPool, username: &str, password: &str, role: &str) {
    let token = admin_token();
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        Some(&token),
        serde_json::json!({
            "username": username,
            "email": format!("{username}@example.edu"),
            "password": password,
            "role": role
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_then_login_returns_token(pool: PgPool) {
    register_user(&pool, "club_admin", "a-strong-password", "admin").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({"username": "club_admin", "password": "a-strong-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Login successful");
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["expires_in"], 3600);
    assert_eq!(json["data"]["user"]["username"], "club_admin");
    assert_eq!(json["data"]["user"]["role"], "admin");
    // The password hash must never appear anywhere in the payload.
    assert!(json["data"]["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_and_unknown_user_get_same_message(pool: PgPool) {
    register_user(&pool, "mod1", "a-strong-password", "moderator").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({"username": "mod1", "password": "wrong"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_pw = body_json(response).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({"username": "ghost", "password": "whatever"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let no_user = body_json(response).await;

    assert_eq!(wrong_pw["message"], no_user["message"]);
    assert_eq!(wrong_pw["message"], "Invalid username or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_requires_admin(pool: PgPool) {
    let token = moderator_token();
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        Some(&token),
        serde_json::json!({
            "username": "sneaky",
            "email": "sneaky@example.edu",
            "password": "a-strong-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    register_user(&pool, "taken", "a-strong-password", "moderator").await;

    let token = admin_token();
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        Some(&token),
        serde_json::json!({
            "username": "taken",
            "email": "other@example.edu",
            "password": "a-strong-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn short_password_is_rejected(pool: PgPool) {
    let token = admin_token();
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        Some(&token),
        serde_json::json!({
            "username": "shorty",
            "email": "shorty@example.edu",
            "password": "short"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Password must be at least 8 characters long"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reset_password_overwrites_credentials(pool: PgPool) {
    register_user(&pool, "forgetful", "old-password-1", "moderator").await;

    let token = admin_token();
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/reset-password",
        Some(&token),
        serde_json::json!({"username": "forgetful", "new_password": "new-password-2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer works; new one does.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({"username": "forgetful", "password": "old-password-1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({"username": "forgetful", "password": "new-password-2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_returns_current_user(pool: PgPool) {
    register_user(&pool, "whoami", "a-strong-password", "admin").await;

    let app = common::build_test_app(pool.clone());
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            None,
            serde_json::json!({"username": "whoami", "password": "a-strong-password"}),
        )
        .await,
    )
    .await;
    let token = login["data"]["access_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    use tower::ServiceExt;
    let request = axum::http::Request::builder()
        .uri("/api/v1/auth/me")
        .header("authorization", format!("Bearer {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "whoami");
    assert_eq!(json["data"]["role"], "admin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_without_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
