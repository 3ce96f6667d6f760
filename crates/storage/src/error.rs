//! Typed error enum for the storage layer.
//!
//! Lets callers tell constraint violations from transient connectivity
//! failures without downcasting.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique constraint violation, e.g. two inserts racing for the same `(session_id, hits)`.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQL / connection / pool timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Schema creation failure.
    #[error("migration error: {0}")]
    Migration(#[source] sqlx::Error),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            )
        )
    }

    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// SQLSTATE 23505 maps to `Duplicate`, everything else to `Database`.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}
