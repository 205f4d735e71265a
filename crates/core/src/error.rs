use crate::order::OrderStatus;
use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Each variant maps to exactly one HTTP status and machine-readable code in
/// the API layer (`cloudrent-api::error`). Variants that could leak account
/// or order existence deliberately carry no distinguishing detail:
/// [`CoreError::InvalidCredentials`] is identical for unknown email and wrong
/// password, and ownership failures surface as [`CoreError::NotFound`], never
/// as a 403.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Login or password re-verification failure. The message is fixed so
    /// callers cannot distinguish "no such account" from "wrong password".
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing authentication token")]
    TokenMissing,

    /// The bearer credential could not be parsed as a token at all.
    #[error("Malformed authentication token")]
    TokenMalformed,

    #[error("Authentication token has expired")]
    TokenExpired,

    /// Verification failed for any other reason (e.g. bad signature).
    #[error("Invalid authentication token")]
    TokenInvalid,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A status change was attempted from a state that does not allow it.
    #[error("Order in status '{from}' cannot be {action}")]
    InvalidTransition {
        from: OrderStatus,
        action: &'static str,
    },

    /// The referenced catalog listing is absent or not currently rentable.
    #[error("Resource {0} does not exist or is not available")]
    ResourceUnavailable(DbId),

    #[error("Internal error: {0}")]
    Internal(String),
}
