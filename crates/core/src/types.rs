/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Error produced when a stored text value does not match any variant of a
/// closed enum (`Role`, `OrderStatus`, `ResourceStatus`).
///
/// The database CHECK constraints make this unreachable in practice; it
/// exists so row decoding can fail loudly instead of inventing a variant.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct InvalidEnumValue(pub String);
