//! Shared response envelope for API handlers.
//!
//! Every success payload is wrapped in `{ "data": ... }`; errors use the
//! `{ "error", "code" }` body produced by `AppError`. One shape per
//! outcome, no per-endpoint variation.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
