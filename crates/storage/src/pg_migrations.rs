//! PostgreSQL schema for hit-counter storage.

use hit_counter_core::SESSION_ID_MAX_LEN;
use sqlx::PgPool;

use crate::error::StorageError;

pub const HIT_COUNT_TABLE: &str = "hit_count";

/// Create the `hit_count` table if absent. Safe to run any number of times.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS {HIT_COUNT_TABLE} (
            session_id  VARCHAR({SESSION_ID_MAX_LEN}),
            hits        BIGINT,
            ts          TIMESTAMPTZ NOT NULL,
            CONSTRAINT pk_hit_count PRIMARY KEY (session_id, hits)
        )"
    ))
    .execute(pool)
    .await
    .map_err(StorageError::Migration)?;

    tracing::debug!(table = HIT_COUNT_TABLE, "schema ensured");
    Ok(())
}
