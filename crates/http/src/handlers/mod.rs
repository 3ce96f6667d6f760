pub mod counter;
pub mod status;

use axum::http::Uri;

use crate::api_error::ApiError;

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
