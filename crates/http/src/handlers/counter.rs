use std::sync::Arc;

use askama::Template;
use axum::{extract::State, http::HeaderMap, response::Html};
use axum_extra::extract::cookie::CookieJar;
use hit_counter_core::resolve_session;

use crate::AppState;
use crate::api_error::ApiError;
use crate::cookies::{session_cookie, session_token};
use crate::template::IndexTemplate;

/// Count this visit and render the page.
///
/// Storage trouble still answers 200 with a count of 0; only a render failure is an error.
pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<(CookieJar, Html<String>), ApiError> {
    tracing::debug!("accessing main application endpoint");

    let session = resolve_session(session_token(&headers).as_deref());
    if session.is_new {
        tracing::debug!(session_id = %session.id, "no session cookie, issued new session");
    }

    let hits = state.hit_service.hit_count(&session.id).await;
    let page = IndexTemplate { hits }.render()?;

    let jar = CookieJar::new().add(session_cookie(session.id));
    Ok((jar, Html(page)))
}
