//! Shared entity models and utilities for the WashPoint POS core.
//!
//! Consumed by the `washpoint` crate (and by any UI shell on top of it).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod models;
pub mod util;
