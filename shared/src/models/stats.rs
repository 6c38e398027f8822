//! Reporting aggregates
//!
//! Derived values only — nothing here is persisted. Everything is
//! recomputed from the ledger and customer store on each call.

use serde::{Deserialize, Serialize};

/// Dashboard headline numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub daily_revenue: f64,
    pub monthly_revenue: f64,
    pub total_customers: i64,
    pub todays_washes: i64,
}

/// One day of the trailing revenue series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenuePoint {
    /// Business date, YYYY-MM-DD
    pub date: String,
    pub revenue: f64,
}
