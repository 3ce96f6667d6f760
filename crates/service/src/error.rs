//! Typed error enum for the service layer.

use hit_counter_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, pool, duplicate).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

