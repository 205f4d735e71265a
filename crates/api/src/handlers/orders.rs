//! Handlers for the `/orders` resource.
//!
//! Every endpoint is scoped to the authenticated identity. An order that
//! belongs to someone else answers exactly like one that does not exist
//! (404, identical body), so order ids cannot be probed.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use cloudrent_core::error::CoreError;
use cloudrent_core::order::{total_price_cents, OrderStatus};
use cloudrent_core::types::DbId;
use cloudrent_db::models::order::{CreateOrder, OrderWithResource};
use cloudrent_db::repositories::{OrderRepo, ResourceRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /orders`.
///
/// The upper bounds are generous operational limits (a thousand instances,
/// a ten-year rental); together with the checked price computation they
/// keep the frozen total well inside `i64`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    pub resource_id: DbId,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = 1000, message = "must be between 1 and 1000"))]
    pub quantity: i32,
    #[validate(range(min = 1, max = 3650, message = "must be between 1 and 3650"))]
    pub duration_days: i32,
    #[serde(default)]
    pub remark: String,
}

fn default_quantity() -> i32 {
    1
}

/// Query parameters for `GET /orders`.
#[derive(Debug, Deserialize)]
pub struct ListOrdersParams {
    pub status: Option<OrderStatus>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/orders
///
/// Creates an order against an available listing. The total price is
/// computed here once and frozen into the row; later catalog price changes
/// never affect it.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<OrderWithResource>>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let resource = ResourceRepo::find_available(&state.pool, input.resource_id)
        .await?
        .ok_or(AppError::Core(CoreError::ResourceUnavailable(
            input.resource_id,
        )))?;

    let total = total_price_cents(
        resource.hourly_price_cents,
        input.quantity,
        input.duration_days,
    )
    .ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Total price exceeds the representable range".into(),
        ))
    })?;

    let order = OrderRepo::create(
        &state.pool,
        &CreateOrder {
            user_id: user.user_id,
            resource_id: resource.id,
            quantity: input.quantity,
            duration_days: input.duration_days,
            total_price_cents: total,
            remark: input.remark,
        },
    )
    .await?;

    let order = fetch_owned(&state, order.id, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(order))))
}

/// GET /api/v1/orders?status=
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ListOrdersParams>,
) -> AppResult<Json<DataResponse<Vec<OrderWithResource>>>> {
    let orders = OrderRepo::list_for_user(&state.pool, user.user_id, params.status).await?;
    Ok(Json(DataResponse::new(orders)))
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OrderWithResource>>> {
    let order = fetch_owned(&state, id, user.user_id).await?;
    Ok(Json(DataResponse::new(order)))
}

/// POST /api/v1/orders/{id}/pay
///
/// Records the payment outcome; settlement with an actual payment gateway
/// is out of scope. The transition is a single conditional update, so a
/// concurrent cancel cannot silently overwrite it.
pub async fn pay(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OrderWithResource>>> {
    let transitioned = OrderRepo::mark_paid(&state.pool, id, user.user_id).await?;
    finish_transition(&state, id, user.user_id, transitioned, "paid").await
}

/// POST /api/v1/orders/{id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OrderWithResource>>> {
    let transitioned = OrderRepo::cancel(&state.pool, id, user.user_id).await?;
    finish_transition(&state, id, user.user_id, transitioned, "cancelled").await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch an owned order with its resource summary, mapping absence (or
/// other ownership) to the uniform not-found error.
async fn fetch_owned(
    state: &AppState,
    id: DbId,
    user_id: DbId,
) -> Result<OrderWithResource, AppError> {
    OrderRepo::find_with_resource(&state.pool, id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))
}

/// Resolve the outcome of a conditional transition. A zero-row update means
/// either the order is invisible to this identity (not found) or it sits in
/// a terminal status (invalid transition); a scoped re-read tells the two
/// apart after the race has already been decided.
async fn finish_transition(
    state: &AppState,
    id: DbId,
    user_id: DbId,
    transitioned: bool,
    action: &'static str,
) -> AppResult<Json<DataResponse<OrderWithResource>>> {
    if transitioned {
        let order = fetch_owned(state, id, user_id).await?;
        return Ok(Json(DataResponse::new(order)));
    }

    match OrderRepo::find_scoped(&state.pool, id, user_id).await? {
        None => Err(AppError::Core(CoreError::NotFound { entity: "Order", id })),
        Some(order) => Err(AppError::Core(CoreError::InvalidTransition {
            from: order.status,
            action,
        })),
    }
}
