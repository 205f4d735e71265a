//! Order entity model and DTOs.

use cloudrent_core::order::OrderStatus;
use cloudrent_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Bare order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    pub resource_id: DbId,
    pub quantity: i32,
    pub duration_days: i32,
    pub total_price_cents: i64,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub remark: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order row joined with a denormalized summary of the rented resource,
/// as returned by every order read endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderWithResource {
    pub id: DbId,
    pub user_id: DbId,
    pub resource_id: DbId,
    pub quantity: i32,
    pub duration_days: i32,
    pub total_price_cents: i64,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub remark: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    // Joined from `resources`. Live catalog values for display; the frozen
    // price of this order is `total_price_cents`.
    pub resource_name: String,
    pub cpu_cores: i32,
    pub memory_gb: i32,
    pub storage_gb: i32,
    pub hourly_price_cents: i64,
}

/// DTO for inserting an order. The price has already been computed and
/// frozen by the caller.
#[derive(Debug)]
pub struct CreateOrder {
    pub user_id: DbId,
    pub resource_id: DbId,
    pub quantity: i32,
    pub duration_days: i32,
    pub total_price_cents: i64,
    pub remark: String,
}
