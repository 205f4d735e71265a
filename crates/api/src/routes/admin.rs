//! Route definitions for the admin surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. Admin role required.
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(admin::list_users))
}
