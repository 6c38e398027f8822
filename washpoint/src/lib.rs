//! WashPoint — point-of-sale and loyalty core for a small car-wash shop.
//!
//! Single local SQLite database, no network service. The UI shell on
//! top of this crate collects a customer, a service selection and a
//! redemption choice; [`settlement::SettlementEngine`] turns that into
//! an immutable ledger entry plus an atomic point-balance update, and
//! [`reporting`] derives dashboard numbers back out of the stores.

pub mod backup;
pub mod db;
pub mod reporting;
pub mod settlement;
pub mod summary;
pub mod utils;

pub use db::DbService;
pub use settlement::SettlementEngine;
pub use utils::{AppError, AppResult};
