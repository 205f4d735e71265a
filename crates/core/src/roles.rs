//! Account roles.
//!
//! Role is a closed enumeration rather than a free-form string so that
//! authorization checks are exhaustiveness-checked by the compiler. The
//! database stores the lowercase name (`users.role` TEXT with a CHECK
//! constraint matching these variants).

use serde::{Deserialize, Serialize};

use crate::types::InvalidEnumValue;

/// Role of a registered principal. Immutable after account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// The lowercase name stored in the database and embedded in tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(InvalidEnumValue(format!("unknown role: {other}"))),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = InvalidEnumValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
