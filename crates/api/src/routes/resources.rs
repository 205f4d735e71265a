//! Route definitions for the public `/resources` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::resources;
use crate::state::AppState;

/// Routes mounted at `/resources`. All public.
///
/// `/hot` must be registered alongside `/{id}` -- axum routes static
/// segments before captures, so the two do not conflict.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resources::list))
        .route("/hot", get(resources::hot))
        .route("/{id}", get(resources::get_by_id))
}
