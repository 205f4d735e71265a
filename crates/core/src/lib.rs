//! Domain types for the Cloudrent rental marketplace.
//!
//! Pure types and rules only -- no I/O. The database layer lives in
//! `cloudrent-db`, the HTTP layer in `cloudrent-api`.

pub mod error;
pub mod order;
pub mod resource;
pub mod roles;
pub mod types;
