//! Admin-only handlers.
//!
//! The administrative surface is intentionally small: a listing of all
//! identities, gated by [`RequireAdmin`].

use axum::extract::State;
use axum::Json;
use cloudrent_db::models::user::UserResponse;
use cloudrent_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    let users = users.into_iter().map(|u| u.into_response()).collect();
    Ok(Json(DataResponse::new(users)))
}
