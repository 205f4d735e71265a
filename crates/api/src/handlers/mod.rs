//! Request handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod orders;
pub mod resources;
pub mod users;
