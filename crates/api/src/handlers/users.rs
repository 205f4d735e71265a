//! Handlers for the `/users` resource: own profile and password change.

use axum::extract::State;
use axum::http::StatusCode;
use cloudrent_core::error::CoreError;
use cloudrent_db::models::user::{UpdateProfile, UserResponse};
use cloudrent_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /users/change-password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// GET /api/v1/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let row = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse::new(row.into_response())))
}

/// PUT /api/v1/users/profile
///
/// Partial patch: only the fields present in the body are written. Email is
/// the login key and is not editable here.
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(patch): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if patch.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "No fields to update".into(),
        )));
    }
    if let Some(username) = &patch.username {
        if username.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "username must not be empty".into(),
            )));
        }
    }

    let row = UserRepo::update_profile(&state.pool, user.user_id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse::new(row.into_response())))
}

/// POST /api/v1/users/change-password
///
/// Re-verifies the old password before accepting the new one. A mismatch is
/// the same `INVALID_CREDENTIALS` failure as a bad login.
pub async fn change_password(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let row = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    let old_valid = verify_password(&input.old_password, &row.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !old_valid {
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::update_password(&state.pool, user.user_id, &new_hash).await?;
    if !updated {
        // The account vanished between the check and the write.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
