use axum::Json;

use crate::response_types::StatusResponse;

/// Liveness check. Never touches the database.
pub async fn status() -> Json<StatusResponse> {
    tracing::debug!("accessing healthcheck endpoint");
    Json(StatusResponse::healthy())
}
