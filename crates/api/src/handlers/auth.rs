//! Handlers for the `/auth` resource (login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use cloudrent_core::error::CoreError;
use cloudrent_core::roles::Role;
use cloudrent_core::types::DbId;
use cloudrent_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::issue_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Sanitized identity summary embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Single unified login endpoint: the role comes from the fetched record.
/// Unknown email and wrong password produce the identical 401 so the
/// endpoint cannot be used to enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    // Best-effort: a failed timestamp refresh must never fail the login.
    if let Err(e) = UserRepo::touch_last_login(&state.pool, user.id).await {
        tracing::warn!(user_id = user.id, error = %e, "Failed to refresh last_login_at");
    }

    let token = issue_token(user.id, &user.email, user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token issuance error: {e}")))?;

    Ok(Json(DataResponse::new(LoginResponse {
        token,
        expires_in: state.config.jwt.expiry_hours * 3600,
        user: UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        },
    })))
}

/// POST /api/v1/auth/logout
///
/// Sessions are stateless, so there is nothing to revoke server-side; the
/// client discards its token. The last-login timestamp is refreshed on a
/// best-effort basis.
pub async fn logout(State(state): State<AppState>, user: AuthUser) -> AppResult<StatusCode> {
    if let Err(e) = UserRepo::touch_last_login(&state.pool, user.user_id).await {
        tracing::warn!(user_id = user.user_id, error = %e, "Failed to refresh last_login_at");
    }
    Ok(StatusCode::NO_CONTENT)
}
