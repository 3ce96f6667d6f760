//! Core types for hit-counter
//!
//! Domain types, session resolution and configuration shared across crates.

mod config;
mod constants;
mod env_config;
mod error;
mod hit;
mod session;

pub use config::DatabaseConfig;
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use hit::HitRecord;
pub use session::*;
