//! Handlers for the `/auth` resource (login, verify).
//!
//! There is no user table: the single admin account comes from the
//! environment and its password is verified against the Argon2id hash
//! computed at config load.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use bulltrade_core::error::CoreError;

use crate::auth::jwt::{generate_token, validate_token, Claims};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// Response for `POST /api/auth/verify`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: Claims,
}

/// POST /api/auth/login
///
/// Authenticate against the configured admin credentials. Both a wrong
/// username and a wrong password produce the same 401 message.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = &state.config.admin;

    let username_matches = input.username == admin.username;

    let password_matches = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !username_matches || !password_matches {
        tracing::warn!(username = %input.username, "Failed admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_token(&admin.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %admin.username, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        username: admin.username.clone(),
    }))
}

/// POST /api/auth/verify
///
/// Validate the presented bearer token and echo its decoded claims so
/// the admin panel can restore a session after a reload.
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<VerifyResponse>> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("No token provided".into())))?;

    let claims = validate_token(token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    Ok(Json(VerifyResponse {
        valid: true,
        user: claims,
    }))
}
