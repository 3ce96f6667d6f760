//! HitStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hit_counter_core::HitRecord;
use sqlx::{Connection, Row};

use super::PgStorage;
use crate::error::StorageError;
use crate::pg_migrations::HIT_COUNT_TABLE;
use crate::traits::HitStore;

fn insert_next_sql() -> String {
    format!(
        "INSERT INTO {HIT_COUNT_TABLE} (session_id, hits, ts)
         SELECT $1, COALESCE(MAX(hits) + 1, 1), NOW()
         FROM {HIT_COUNT_TABLE}
         WHERE session_id = $1"
    )
}

fn max_hits_sql() -> String {
    format!("SELECT MAX(hits) FROM {HIT_COUNT_TABLE} WHERE session_id = $1")
}

fn history_sql() -> String {
    format!(
        "SELECT session_id, hits, ts FROM {HIT_COUNT_TABLE} WHERE session_id = $1 ORDER BY hits"
    )
}

#[async_trait]
impl HitStore for PgStorage {
    async fn record_hit(&self, session_id: &str) -> Result<i64, StorageError> {
        let insert = insert_next_sql();
        let max_hits = max_hits_sql();
        let mut conn = self.pool.acquire().await?;

        let mut tx = conn.begin().await?;
        // Serializes concurrent requests of one session so both cannot read the
        // same MAX(hits). Released at commit/rollback.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(session_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(&insert).bind(session_id).execute(&mut *tx).await?;
        tx.commit().await?;

        let hits: Option<i64> =
            sqlx::query_scalar(&max_hits).bind(session_id).fetch_one(&mut *conn).await?;
        Ok(hits.unwrap_or(0))
    }

    async fn current_hits(&self, session_id: &str) -> Result<i64, StorageError> {
        let sql = max_hits_sql();
        let hits: Option<i64> =
            sqlx::query_scalar(&sql).bind(session_id).fetch_one(&self.pool).await?;
        Ok(hits.unwrap_or(0))
    }

    async fn session_history(&self, session_id: &str) -> Result<Vec<HitRecord>, StorageError> {
        let sql = history_sql();
        let rows = sqlx::query(&sql).bind(session_id).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_hit_record).collect()
    }
}

fn row_to_hit_record(row: &sqlx::postgres::PgRow) -> Result<HitRecord, StorageError> {
    let ts: DateTime<Utc> = row.try_get("ts")?;
    Ok(HitRecord { session_id: row.try_get("session_id")?, hits: row.try_get("hits")?, ts })
}
