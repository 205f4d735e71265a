//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Response/patch DTOs where the entity needs a sanitized or partial view

pub mod order;
pub mod resource;
pub mod user;
