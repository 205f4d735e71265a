//! Request body extraction.
//!
//! [`Json`] wraps `axum::Json` so that an unparseable or incomplete body
//! is reported through the same `{ "error", "code" }` envelope as every
//! other failure, instead of axum's plain-text 422.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use cloudrent_core::error::CoreError;
use serde::Serialize;

use crate::error::AppError;

/// Drop-in replacement for `axum::Json` in handlers that deserialize a
/// request body. Rejections become 400 `VALIDATION_ERROR` responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
