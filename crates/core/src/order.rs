//! Order status machine and pricing.
//!
//! An order moves through a one-way status machine:
//!
//! ```text
//! unpaid --pay--> paid
//! unpaid --cancel--> cancelled
//! ```
//!
//! `paid` and `cancelled` are terminal. The transition itself is enforced
//! atomically in the repository layer (conditional UPDATE keyed on the
//! expected prior status); this module only describes the machine.

use serde::{Deserialize, Serialize};

use crate::types::InvalidEnumValue;

/// Hours billed per rental day.
pub const HOURS_PER_DAY: i64 = 24;

/// Payment status of an order. Stored as lowercase text in `orders.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Unpaid,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Unpaid => "unpaid",
            OrderStatus::Paid => "paid",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether any further transition is possible from this status.
    pub fn is_terminal(self) -> bool {
        match self {
            OrderStatus::Unpaid => false,
            OrderStatus::Paid | OrderStatus::Cancelled => true,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(OrderStatus::Unpaid),
            "paid" => Ok(OrderStatus::Paid),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(InvalidEnumValue(format!("unknown order status: {other}"))),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = InvalidEnumValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Compute the total price of a rental, in cents.
///
/// The catalog price is per hour; rentals are billed in whole days. The
/// result is frozen into the order row at creation time and never
/// recomputed, so later catalog price changes do not affect existing orders.
///
/// Returns `None` if the product does not fit in `i64`; callers must treat
/// that as invalid input, never as a price.
pub fn total_price_cents(
    hourly_price_cents: i64,
    quantity: i32,
    duration_days: i32,
) -> Option<i64> {
    hourly_price_cents
        .checked_mul(i64::from(quantity))?
        .checked_mul(i64::from(duration_days))?
        .checked_mul(HOURS_PER_DAY)
}
