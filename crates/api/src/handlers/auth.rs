//! Handlers for the `/auth` resource (login, register, password reset, me).
//!
//! Sessions are stateless: a successful login returns an HS256 access token
//! and nothing is stored server-side. Registration and password resets are
//! admin-only operations since accounts exist solely for the content admins.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use esports_core::error::CoreError;
use esports_core::types::DbId;
use esports_db::models::user::RegisterUser;
use esports_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{self, ApiResponse};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub username: String,
    pub new_password: String,
}

/// Successful login payload, carried inside the standard envelope.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthPayload`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. A wrong username and a wrong
/// password produce the same message.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    let payload = AuthPayload {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        },
    };
    response::ok(&state, payload, "Login successful")
}

/// POST /api/v1/auth/register
///
/// Admin-only. A duplicate username surfaces as a 409 via the unique
/// constraint.
pub async fn register(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<ApiResponse>)> {
    input.validate()?;
    let password = input.password.as_deref().unwrap_or_default();
    validate_password_strength(password).map_err(CoreError::Validation)?;

    let password_hash = hash_password(password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        input.username.as_deref().unwrap_or_default(),
        input.email.as_deref().unwrap_or_default(),
        &password_hash,
        input.role_or_default(),
    )
    .await?;

    response::created(&state, user, "User registered successfully")
}

/// POST /api/v1/auth/reset-password
///
/// Admin-only overwrite of another account's password.
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<Json<ApiResponse>> {
    validate_password_strength(&input.new_password).map_err(CoreError::Validation)?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    if !UserRepo::set_password_hash(&state.pool, &input.username, &password_hash).await? {
        return Err(AppError::Core(CoreError::KeyNotFound {
            entity: "User",
            key: input.username.clone(),
        }));
    }

    response::ok(
        &state,
        serde_json::Value::Null,
        "Password reset successfully",
    )
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<ApiResponse>> {
    let row = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let info = UserInfo {
        id: row.id,
        username: row.username,
        email: row.email,
        role: row.role,
    };
    response::ok(&state, info, "User retrieved successfully")
}
