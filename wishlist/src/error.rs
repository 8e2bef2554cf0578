//! Error types for the wishlist library.
//!
//! This module provides the error hierarchy for all store operations,
//! using `thiserror` for ergonomic error handling.
//!
//! Lookups that find nothing are not errors: they return `Ok(None)`.
//! Likewise, deleting somebody else's item is reported as zero affected
//! rows rather than as a distinct error kind.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type alias for operations that may fail with a wishlist error.
///
/// # Examples
///
/// ```
/// use wishlist::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the wishlist library.
#[derive(Debug, Error)]
pub enum Error {
    /// A unique, foreign-key or not-null constraint was violated.
    ///
    /// Raised for duplicate user names or emails and for item rows that
    /// reference a user that does not exist.
    #[error("constraint violation: {details}")]
    ConstraintViolation {
        /// The message reported by the store.
        details: String,
    },

    /// Any other store failure (I/O inside `SQLite`, malformed statement, ...).
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, ref message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Self::ConstraintViolation {
                    details: message.clone().unwrap_or_else(|| failure.to_string()),
                }
            }
            other => Self::Database(other),
        }
    }
}

impl Error {
    /// Check if error is a constraint violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::Error;
    ///
    /// let err = Error::ConstraintViolation { details: "UNIQUE constraint failed: users.email".into() };
    /// assert!(err.is_constraint_violation());
    /// ```
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}
