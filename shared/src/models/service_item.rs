//! Service Item Model

use serde::{Deserialize, Serialize};

/// Wash service category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "UPPERCASE"))]
pub enum ServiceCategory {
    /// Exterior-only wash
    Exterior,
    /// Interior cleaning
    Interior,
    /// Full in-and-out wash
    Full,
    /// Detailing work (coating, polish)
    Detailing,
}

/// Catalog entry for a single wash service.
///
/// Immutable at runtime — the catalog is seeded on first run and never
/// mutated through the application. Transactions snapshot the items they
/// charged, so a later catalog reseed cannot rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ServiceItem {
    pub id: i64,
    pub name: String,
    /// Price in currency units, non-negative
    pub price: f64,
    pub category: ServiceCategory,
    /// Points printed on the price list; loyalty accrual itself is
    /// derived from the amount actually paid, not from this field
    pub points_awarded: i64,
}
