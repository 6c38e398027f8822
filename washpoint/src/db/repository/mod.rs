//! Repository Module
//!
//! One module per store. Repositories are free functions over a
//! `&SqlitePool`; the mutating calls the settlement engine needs inside
//! its atomic unit take a `&mut SqliteConnection` instead so they can
//! run on the engine's transaction.

pub mod customer;
pub mod ledger;
pub mod service_item;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Database(format!("JSON (de)serialization failed: {err}"))
    }
}

pub type RepoResult<T> = Result<T, RepoError>;
