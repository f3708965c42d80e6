//! Handlers for authentication (login).

use axum::extract::State;
use axum::Json;
use perftrack_core::error::CoreError;
use perftrack_core::roles::ROLE_ADMIN;
use perftrack_core::types::DbId;
use perftrack_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    /// Accepted for form compatibility but never compared against anything;
    /// accounts are provisioned out of band and login is gated on role alone.
    #[allow(dead_code)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Authenticate with a username. Only `admin` users may log in; any other
/// role is rejected with 403 even when the account exists.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    if user.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Access denied. Only admins can log in.".into(),
        )));
    }

    let token = generate_token(user.id, &user.username, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
        },
    }))
}
