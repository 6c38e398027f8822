//! Data models
//!
//! Entity shapes shared between the persistence layer, the settlement
//! engine and reporting. Everything here is serde-serializable so the
//! same shapes travel through the backup document unchanged.

pub mod customer;
pub mod service_item;
pub mod stats;
pub mod transaction;

// Re-exports
pub use customer::*;
pub use service_item::*;
pub use stats::*;
pub use transaction::*;
