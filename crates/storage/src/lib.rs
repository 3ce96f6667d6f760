//! Storage layer for hit-counter
//!
//! PostgreSQL storage for per-session hit records behind the [`HitStore`] trait.

pub mod error;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use pg_storage::PgStorage;
pub use traits::HitStore;
