//! Repository structs: one per table, static async methods, parameterized
//! SQL only. All mutations that depend on prior state use single-row
//! conditional updates checked via affected-row count.

mod order_repo;
mod resource_repo;
mod user_repo;

pub use order_repo::OrderRepo;
pub use resource_repo::ResourceRepo;
pub use user_repo::UserRepo;
