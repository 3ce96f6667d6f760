//! Typed API error for HTTP handlers.
//!
//! Converts errors into HTTP responses with a JSON body `{"error": "message"}`.
//! Storage failures on the counter route never reach this type: they degrade to a zero count.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found — no route matches the request.
    NotFound(String),
    /// 500 Internal Server Error — page could not be rendered. Details logged, not exposed.
    Render(askama::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Render(err) => {
                tracing::error!(error = %err, "template render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}
