use std::sync::Arc;

use hit_counter_core::HitRecord;
use hit_counter_storage::HitStore;

use crate::ServiceError;

pub struct HitService {
    store: Arc<dyn HitStore>,
}

impl HitService {
    #[must_use]
    pub fn new(store: Arc<dyn HitStore>) -> Self {
        Self { store }
    }

    /// Record a visit for `session_id` and return the session's running count.
    ///
    /// Storage failures are logged and reported as a count of 0; callers never
    /// see an error from this path.
    pub async fn hit_count(&self, session_id: &str) -> i64 {
        tracing::debug!(session_id, "accessing hit count for session");
        match self.store.record_hit(session_id).await {
            Ok(hits) => {
                tracing::debug!(session_id, hits, "hits recorded for session");
                hits
            },
            Err(e) => {
                tracing::error!(
                    session_id,
                    error = %e,
                    duplicate = e.is_duplicate(),
                    transient = e.is_transient(),
                    "failed to record hit"
                );
                0
            },
        }
    }

    pub async fn current_hits(&self, session_id: &str) -> Result<i64, ServiceError> {
        Ok(self.store.current_hits(session_id).await?)
    }

    pub async fn session_history(&self, session_id: &str) -> Result<Vec<HitRecord>, ServiceError> {
        Ok(self.store.session_history(session_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use hit_counter_storage::StorageError;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<HashMap<String, Vec<HitRecord>>>,
    }

    #[async_trait]
    impl HitStore for MemoryStore {
        async fn record_hit(&self, session_id: &str) -> Result<i64, StorageError> {
            let mut rows = self.rows.lock().unwrap();
            let records = rows.entry(session_id.to_owned()).or_default();
            let hits = records.last().map_or(1, |r| r.hits + 1);
            records.push(HitRecord { session_id: session_id.to_owned(), hits, ts: Utc::now() });
            Ok(hits)
        }

        async fn current_hits(&self, session_id: &str) -> Result<i64, StorageError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(session_id).and_then(|r| r.last()).map_or(0, |r| r.hits))
        }

        async fn session_history(
            &self,
            session_id: &str,
        ) -> Result<Vec<HitRecord>, StorageError> {
            Ok(self.rows.lock().unwrap().get(session_id).cloned().unwrap_or_default())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl HitStore for FailingStore {
        async fn record_hit(&self, _session_id: &str) -> Result<i64, StorageError> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn current_hits(&self, _session_id: &str) -> Result<i64, StorageError> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn session_history(
            &self,
            _session_id: &str,
        ) -> Result<Vec<HitRecord>, StorageError> {
            Err(StorageError::Duplicate("pk_hit_count".to_owned()))
        }
    }

    #[tokio::test]
    async fn test_sequential_hits_count_from_one() {
        let service = HitService::new(Arc::new(MemoryStore::default()));
        for expected in 1..=4 {
            assert_eq!(service.hit_count("abc").await, expected);
        }
    }

    #[tokio::test]
    async fn test_interleaved_sessions_are_independent() {
        let service = HitService::new(Arc::new(MemoryStore::default()));
        assert_eq!(service.hit_count("abc").await, 1);
        assert_eq!(service.hit_count("abc").await, 2);
        assert_eq!(service.hit_count("xyz").await, 1);
        assert_eq!(service.hit_count("abc").await, 3);
        assert_eq!(service.current_hits("xyz").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure_degrades_to_zero() {
        let service = HitService::new(Arc::new(FailingStore));
        assert_eq!(service.hit_count("abc").await, 0);
    }

    #[tokio::test]
    async fn test_read_paths_propagate_errors() {
        let service = HitService::new(Arc::new(FailingStore));
        let err = service.current_hits("abc").await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(ref e) if e.is_transient()));
        assert!(service.session_history("abc").await.is_err());
    }

    #[tokio::test]
    async fn test_history_matches_counts() {
        let service = HitService::new(Arc::new(MemoryStore::default()));
        for _ in 0..3 {
            service.hit_count("abc").await;
        }
        let hits: Vec<i64> =
            service.session_history("abc").await.unwrap().iter().map(|r| r.hits).collect();
        assert_eq!(hits, vec![1, 2, 3]);
    }
}
