//! Resource catalog entity model.
//!
//! The catalog is read-mostly from this service's perspective: orders
//! reference listings by id, and the only writes happen through seeding or
//! operator tooling, not the public API.

use cloudrent_core::resource::ResourceStatus;
use cloudrent_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full resource row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub cpu_cores: i32,
    pub memory_gb: i32,
    pub storage_gb: i32,
    pub storage_type: String,
    pub hourly_price_cents: i64,
    #[sqlx(try_from = "String")]
    pub status: ResourceStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a listing (seeding and tests).
#[derive(Debug, Deserialize)]
pub struct CreateResource {
    pub name: String,
    pub description: Option<String>,
    pub cpu_cores: i32,
    pub memory_gb: i32,
    pub storage_gb: i32,
    pub storage_type: String,
    pub hourly_price_cents: i64,
    pub status: ResourceStatus,
}

/// Optional catalog list filters. All absent fields match everything.
#[derive(Debug, Default, Deserialize)]
pub struct ResourceFilter {
    pub cpu_cores: Option<i32>,
    pub memory_gb: Option<i32>,
    pub storage_type: Option<String>,
    pub status: Option<ResourceStatus>,
    /// Substring match over name and description.
    pub keyword: Option<String>,
}
