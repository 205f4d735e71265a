//! Route definitions for the `/orders` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`. All require authentication; every handler
/// additionally scopes its queries to the authenticated identity.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create).get(orders::list))
        .route("/{id}", get(orders::get_by_id))
        .route("/{id}/pay", post(orders::pay))
        .route("/{id}/cancel", post(orders::cancel))
}
