use std::sync::Arc;

use anyhow::Result;
use hit_counter_http::{AppState, create_router};
use hit_counter_service::HitService;

use crate::connect_storage;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = connect_storage().await?;

    if let Err(e) = storage.ensure_schema().await {
        tracing::error!("Error creating hit_count table: {e}");
    }

    let hit_service = Arc::new(HitService::new(Arc::new(storage)));
    let state = Arc::new(AppState::new(hit_service));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
