//! Handlers for the public, read-only `/resources` catalog.

use axum::extract::{Path, Query, State};
use axum::Json;
use cloudrent_core::error::CoreError;
use cloudrent_core::types::DbId;
use cloudrent_db::models::resource::{Resource, ResourceFilter};
use cloudrent_db::repositories::ResourceRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/resources
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ResourceFilter>,
) -> AppResult<Json<DataResponse<Vec<Resource>>>> {
    let resources = ResourceRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse::new(resources)))
}

/// GET /api/v1/resources/hot
pub async fn hot(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Resource>>>> {
    let resources = ResourceRepo::hot(&state.pool).await?;
    Ok(Json(DataResponse::new(resources)))
}

/// GET /api/v1/resources/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Resource>>> {
    let resource = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(DataResponse::new(resource)))
}
