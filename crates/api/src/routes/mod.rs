//! Route tree construction.

pub mod admin;
pub mod auth;
pub mod health;
pub mod orders;
pub mod resources;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                login (public)
/// /auth/logout               logout (requires auth)
///
/// /users/profile             get, update own profile (requires auth)
/// /users/change-password     change password (requires auth)
///
/// /resources                 catalog list with filters (public)
/// /resources/hot             random available listings (public)
/// /resources/{id}            catalog detail (public)
///
/// /orders                    create, list own (requires auth)
/// /orders/{id}               fetch own (requires auth)
/// /orders/{id}/pay           mark paid (requires auth)
/// /orders/{id}/cancel        cancel (requires auth)
///
/// /admin/users               list all users (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/resources", resources::router())
        .nest("/orders", orders::router())
        .nest("/admin", admin::router())
}
