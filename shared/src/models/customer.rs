//! Customer Model

use serde::{Deserialize, Serialize};

/// Membership tier, controls the percentage discount applied at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "UPPERCASE"))]
pub enum MembershipTier {
    #[default]
    Basic,
    Premium,
    Vip,
}

impl MembershipTier {
    /// Fraction of the subtotal discounted for this tier
    pub fn discount_rate(&self) -> f64 {
        match self {
            MembershipTier::Basic => 0.0,
            MembershipTier::Premium => 0.10,
            MembershipTier::Vip => 0.20,
        }
    }
}

/// Customer entity
///
/// The license plate is the business lookup key (case-insensitive).
/// Uniqueness is expected but not enforced by the schema; duplicate
/// plates are a known gap and lookups return the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub license_plate: String,
    pub vehicle_model: String,
    pub phone: String,
    pub membership_tier: MembershipTier,
    /// Loyalty point balance, invariant: never negative
    pub points: i64,
    /// Unix millis of registration
    pub joined_at: i64,
}

/// Create customer payload — points and join timestamp are assigned by
/// the store, never by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub license_plate: String,
    pub vehicle_model: String,
    pub phone: String,
    pub membership_tier: MembershipTier,
}

/// Update customer payload (profile edits only)
///
/// The point balance is deliberately absent: only the settlement engine
/// moves points, atomically with the ledger append.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub license_plate: Option<String>,
    pub vehicle_model: Option<String>,
    pub phone: Option<String>,
    pub membership_tier: Option<MembershipTier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_rates_per_tier() {
        assert_eq!(MembershipTier::Basic.discount_rate(), 0.0);
        assert_eq!(MembershipTier::Premium.discount_rate(), 0.10);
        assert_eq!(MembershipTier::Vip.discount_rate(), 0.20);
    }
}
