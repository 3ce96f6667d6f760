#![allow(dead_code, reason = "each test binary uses a subset")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use hit_counter_core::HitRecord;
use hit_counter_http::{AppState, create_router};
use hit_counter_service::HitService;
use hit_counter_storage::{HitStore, StorageError};

/// In-memory stand-in for `PgStorage` with the same counting semantics.
#[derive(Default)]
pub struct MemoryStore {
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

    async fn session_history(&self, session_id: &str) -> Result<Vec<HitRecord>, StorageError> {
        Ok(self.rows.lock().unwrap().get(session_id).cloned().unwrap_or_default())
    }
}

impl MemoryStore {
    pub fn session_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

/// Store whose every call fails, standing in for an unreachable database.
pub struct FailingStore;

#[async_trait]
impl HitStore for FailingStore {
    async fn record_hit(&self, _session_id: &str) -> Result<i64, StorageError> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn current_hits(&self, _session_id: &str) -> Result<i64, StorageError> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn session_history(&self, _session_id: &str) -> Result<Vec<HitRecord>, StorageError> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn test_app_with(store: Arc<dyn HitStore>) -> Router {
    let service = Arc::new(HitService::new(store));
    create_router(Arc::new(AppState::new(service)))
}

pub fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (test_app_with(store.clone()), store)
}
