//! Resource listing status.

use serde::{Deserialize, Serialize};

use crate::types::InvalidEnumValue;

/// Availability status of a catalog listing.
///
/// Orders may only be placed against `Available` listings. Stored as
/// lowercase text in `resources.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Available,
    Offline,
}

impl ResourceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceStatus::Available => "available",
            ResourceStatus::Offline => "offline",
        }
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceStatus {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(ResourceStatus::Available),
            "offline" => Ok(ResourceStatus::Offline),
            other => Err(InvalidEnumValue(format!("unknown resource status: {other}"))),
        }
    }
}

impl TryFrom<String> for ResourceStatus {
    type Error = InvalidEnumValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
