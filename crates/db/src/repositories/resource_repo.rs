//! Repository for the `resources` catalog table.

use cloudrent_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource, ResourceFilter};

const COLUMNS: &str = "id, name, description, cpu_cores, memory_gb, storage_gb, \
                        storage_type, hourly_price_cents, status, created_at, updated_at";

/// Number of listings returned by the "hot" endpoint.
const HOT_LIMIT: i64 = 3;

pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a listing (seeding and tests; the public API is read-only).
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources
                (name, description, cpu_cores, memory_gb, storage_gb,
                 storage_type, hourly_price_cents, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.cpu_cores)
            .bind(input.memory_gb)
            .bind(input.storage_gb)
            .bind(&input.storage_type)
            .bind(input.hourly_price_cents)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a listing by ID regardless of status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a listing by ID only if it is currently available for rent.
    pub async fn find_available(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1 AND status = 'available'");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List listings matching the filter, newest first.
    ///
    /// Each filter field is optional; a NULL bind matches every row, which
    /// keeps the query fully static and parameterized.
    pub async fn list(pool: &PgPool, filter: &ResourceFilter) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resources
             WHERE ($1::integer IS NULL OR cpu_cores = $1)
               AND ($2::integer IS NULL OR memory_gb = $2)
               AND ($3::text IS NULL OR storage_type = $3)
               AND ($4::text IS NULL OR status = $4)
               AND ($5::text IS NULL
                    OR name ILIKE '%' || $5 || '%'
                    OR description ILIKE '%' || $5 || '%')
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(filter.cpu_cores)
            .bind(filter.memory_gb)
            .bind(&filter.storage_type)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(&filter.keyword)
            .fetch_all(pool)
            .await
    }

    /// A small random selection of available listings for the landing page.
    pub async fn hot(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resources
             WHERE status = 'available'
             ORDER BY RANDOM()
             LIMIT $1"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(HOT_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Change a listing's hourly price. Existing orders keep their frozen
    /// total. Returns `true` if the row existed.
    pub async fn update_hourly_price(
        pool: &PgPool,
        id: DbId,
        hourly_price_cents: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE resources SET hourly_price_cents = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(hourly_price_cents)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
