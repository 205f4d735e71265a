//! Repository for the `orders` table.
//!
//! Every read and write is scoped to the owning user id, so a caller can
//! never observe another identity's orders through this module. Status
//! transitions are single atomic conditional updates: the `WHERE status =
//! 'unpaid'` clause is the compare-and-swap, and the affected-row count
//! tells the caller whether it won.

use cloudrent_core::order::OrderStatus;
use cloudrent_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOrder, Order, OrderWithResource};

const COLUMNS: &str = "id, user_id, resource_id, quantity, duration_days, \
                        total_price_cents, status, remark, created_at, updated_at";

/// Order columns qualified with the `o.` alias plus the joined resource
/// summary, for queries that return [`OrderWithResource`].
const JOINED_COLUMNS: &str = "o.id, o.user_id, o.resource_id, o.quantity, o.duration_days, \
    o.total_price_cents, o.status, o.remark, o.created_at, o.updated_at, \
    r.name AS resource_name, r.cpu_cores, r.memory_gb, r.storage_gb, r.hourly_price_cents";

pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order with status `unpaid`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders
                (user_id, resource_id, quantity, duration_days, total_price_cents, status, remark)
             VALUES ($1, $2, $3, $4, $5, 'unpaid', $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(input.user_id)
            .bind(input.resource_id)
            .bind(input.quantity)
            .bind(input.duration_days)
            .bind(input.total_price_cents)
            .bind(&input.remark)
            .fetch_one(pool)
            .await
    }

    /// Find an order owned by `user_id`. An order that exists but belongs
    /// to someone else is indistinguishable from one that does not exist.
    pub async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an owned order joined with its resource summary.
    pub async fn find_with_resource(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<OrderWithResource>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM orders o
             JOIN resources r ON r.id = o.resource_id
             WHERE o.id = $1 AND o.user_id = $2"
        );
        sqlx::query_as::<_, OrderWithResource>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's orders, optionally filtered by status, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderWithResource>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM orders o
             JOIN resources r ON r.id = o.resource_id
             WHERE o.user_id = $1
               AND ($2::text IS NULL OR o.status = $2)
             ORDER BY o.created_at DESC, o.id DESC"
        );
        sqlx::query_as::<_, OrderWithResource>(&query)
            .bind(user_id)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(pool)
            .await
    }

    /// Atomically mark an unpaid order as paid. Returns `true` if this call
    /// performed the transition; `false` if the order is absent, unowned,
    /// or no longer unpaid.
    pub async fn mark_paid(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        Self::transition_from_unpaid(pool, id, user_id, OrderStatus::Paid).await
    }

    /// Atomically cancel an unpaid order. Same contract as [`Self::mark_paid`].
    pub async fn cancel(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        Self::transition_from_unpaid(pool, id, user_id, OrderStatus::Cancelled).await
    }

    /// The compare-and-swap shared by both transitions. Under a concurrent
    /// pay/cancel race on the same order, the database serializes the two
    /// updates and exactly one observes an affected row.
    async fn transition_from_unpaid(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        to: OrderStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE orders SET status = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2 AND status = 'unpaid'",
        )
        .bind(id)
        .bind(user_id)
        .bind(to.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
