//! PostgreSQL storage backend using sqlx.

mod hits;

use std::time::Duration;

use hit_counter_core::DatabaseConfig;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

/// Fixed-size connection pool over the hit table.
///
/// Each operation borrows one connection and returns it on drop.
#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Open the pool with `min = max = pool_size`.
    ///
    /// `connect_with` establishes one connection before returning, so a bad
    /// target fails here. The pool then tops up to `min_connections` in the
    /// background.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.username)
            .password(&config.password);

        tracing::info!(
            target_db = %config.target(),
            user = %config.username,
            pool_size = config.pool_size,
            "connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .min_connections(config.pool_size)
            .max_connections(config.pool_size)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .test_before_acquire(true)
            .connect_with(options)
            .await?;
        tracing::info!("PgStorage initialized");
        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the schema if absent.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        run_pg_migrations(&self.pool).await
    }
}
