//! Storage backend trait abstraction.

use async_trait::async_trait;
use hit_counter_core::HitRecord;

use crate::error::StorageError;

/// Per-session hit operations.
#[async_trait]
pub trait HitStore: Send + Sync {
    /// Append the next hit for `session_id` and return the session's count afterwards.
    ///
    /// The appended row's `hits` is one past the session's current maximum, or 1
    /// for an unseen session.
    async fn record_hit(&self, session_id: &str) -> Result<i64, StorageError>;

    /// Current count for `session_id` without recording anything. 0 for an unseen session.
    async fn current_hits(&self, session_id: &str) -> Result<i64, StorageError>;

    /// All hit records of `session_id`, ordered by `hits` ascending.
    async fn session_history(&self, session_id: &str) -> Result<Vec<HitRecord>, StorageError>;
}
