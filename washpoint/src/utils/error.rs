//! Unified error handling
//!
//! [`AppError`] is the application-level error surfaced to callers of
//! the settlement engine, reporting and backup modules.
//!
//! Error taxonomy:
//! - validation / business-rule errors reject the operation with no
//!   state mutation;
//! - database errors are fatal to the current operation and always
//!   reported, never swallowed;
//! - the advisory summary collaborator never produces an `AppError` at
//!   all — it degrades to a static fallback string (see `summary`).

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller-supplied input is malformed (rejected, no state change)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Input is well-formed but violates a business rule, e.g. a
    /// redemption exceeding the point balance
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Referenced resource does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Underlying store failed; the current operation is aborted
    #[error("Database error: {0}")]
    Database(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        AppError::BusinessRule(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        AppError::Database(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => {
                tracing::error!(target: "database", error = %msg, "repository failure");
                AppError::Database(msg)
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
