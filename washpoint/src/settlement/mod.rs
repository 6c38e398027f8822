//! Settlement Module
//!
//! The core of the system: turns a customer, a service selection and a
//! points-redemption request into a finalized ledger entry plus an
//! atomic point-balance update. Quote math lives in [`quote`], the
//! persisting engine in [`engine`].

mod engine;
mod quote;

pub use engine::SettlementEngine;
pub use quote::{
    quote, redeemable_increments, Selection, SettlementQuote, POINTS_EARN_DIVISOR,
    REDEMPTION_STEP, REDEMPTION_STEP_VALUE,
};

#[cfg(test)]
mod tests;
