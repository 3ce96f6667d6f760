//! HTTP front end for hit-counter.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod cookies;
mod handlers;
mod response_types;
mod template;

use std::sync::Arc;

use axum::{Router, routing::get};
use hit_counter_service::HitService;
use tower_http::trace::TraceLayer;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Per-session hit counting
    pub hit_service: Arc<HitService>,
}

impl AppState {
    pub fn new(hit_service: Arc<HitService>) -> Self {
        Self { hit_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::counter::index))
        .route("/status", get(handlers::status::status))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
