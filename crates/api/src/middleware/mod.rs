//! Authorization guard extractors.
//!
//! - [`auth::AuthUser`] -- verifies the bearer token and attaches the
//!   identity claims to the request.
//! - [`rbac::RequireAdmin`] -- layers an admin role check on top.

pub mod auth;
pub mod rbac;
