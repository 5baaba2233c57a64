//! Receipt domain entity
//!
//! A receipt is transient: it is built from a submission, scored, and dropped.
//! Only the resulting [`ScoreRecord`] outlives the request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier issued for a processed receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub Uuid);

impl ReceiptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ReceiptId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A purchased line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    /// Decimal price as submitted, e.g. "6.49"
    pub price: String,
}

/// A submitted purchase receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    /// YYYY-MM-DD
    pub purchase_date: String,
    /// HH:MM, 24-hour clock
    pub purchase_time: String,
    /// Never empty
    pub items: Vec<Item>,
    /// Decimal total as submitted, e.g. "35.35"
    pub total: String,
}

/// Points awarded to a processed receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub points: u64,
}
