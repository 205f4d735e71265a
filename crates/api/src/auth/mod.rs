//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- stateless HS256 session token issuance and verification.

pub mod jwt;
pub mod password;
