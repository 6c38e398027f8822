//! Pure settlement math — no I/O, fully deterministic.

use serde::{Deserialize, Serialize};
use shared::models::{MembershipTier, ServiceItem};

/// Points are redeemable only in multiples of this step
pub const REDEMPTION_STEP: i64 = 100;

/// Currency value of one redemption step (100 points = 50 units off)
pub const REDEMPTION_STEP_VALUE: f64 = 50.0;

/// One loyalty point is earned per this many currency units actually
/// paid (the discounted amount, not the list price)
pub const POINTS_EARN_DIVISOR: f64 = 10.0;

/// Service selection with set semantics: a service is either in the
/// basket or not. Toggling the same item twice is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    items: Vec<ServiceItem>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the item if absent, remove it if present (matched by ID).
    pub fn toggle(&mut self, item: ServiceItem) {
        if let Some(pos) = self.items.iter().position(|i| i.id == item.id) {
            self.items.remove(pos);
        } else {
            self.items.push(item);
        }
    }

    pub fn items(&self) -> &[ServiceItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }
}

/// Deterministic breakdown of a proposed settlement.
///
/// Membership and points discounts are both computed off the original
/// subtotal (additive, not compounding) — observed business behavior,
/// kept as-is. Only their sum is persisted on the transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementQuote {
    pub subtotal: f64,
    pub membership_discount: f64,
    pub points_discount: f64,
    /// Clamped at zero: discounts can cancel the charge but never turn
    /// it into a payout, and excess redemption value is not refunded
    pub final_amount: f64,
    pub points_earned: i64,
}

/// Compute the charge breakdown for a tier, an item set and a
/// redemption request. Pure math; the engine validates the redemption
/// against the balance before persisting.
pub fn quote(tier: MembershipTier, items: &[ServiceItem], points_to_redeem: i64) -> SettlementQuote {
    let subtotal: f64 = items.iter().map(|i| i.price).sum();
    let membership_discount = subtotal * tier.discount_rate();
    let points_discount = (points_to_redeem / REDEMPTION_STEP) as f64 * REDEMPTION_STEP_VALUE;
    let final_amount = (subtotal - membership_discount - points_discount).max(0.0);
    let points_earned = (final_amount / POINTS_EARN_DIVISOR).floor() as i64;
    SettlementQuote {
        subtotal,
        membership_discount,
        points_discount,
        final_amount,
        points_earned,
    }
}

/// Redemption amounts a UI may offer for a balance: multiples of 100 up
/// to the balance. Empty below 100 — no redemption is possible.
pub fn redeemable_increments(balance: i64) -> Vec<i64> {
    if balance < REDEMPTION_STEP {
        return Vec::new();
    }
    (1..=balance / REDEMPTION_STEP)
        .map(|n| n * REDEMPTION_STEP)
        .collect()
}
