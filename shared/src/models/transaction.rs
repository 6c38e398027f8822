//! Transaction Model

use serde::{Deserialize, Serialize};

use super::ServiceItem;

/// Settled transaction — an immutable ledger entry.
///
/// `customer_name` and `items` are denormalized snapshots taken at
/// settlement time so that receipts and reports stay historically
/// accurate even if the customer is renamed or catalog prices change.
/// Only the total `discount_amount` is persisted; the membership and
/// points components are not stored separately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub customer_id: i64,
    /// Snapshot of the customer's display name at settlement time
    pub customer_name: String,
    /// Snapshot of the services charged, including their prices
    pub items: Vec<ServiceItem>,
    /// Sum of item prices before any discount
    pub subtotal: f64,
    /// Membership discount + points discount, combined
    pub discount_amount: f64,
    pub points_redeemed: i64,
    /// Amount actually charged, clamped at zero
    pub final_amount: f64,
    /// Unix millis of settlement
    pub created_at: i64,
}
