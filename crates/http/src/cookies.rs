//! Session cookie lookup and issuance.

use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::{Cookie, SameSite};
use hit_counter_core::SESSION_COOKIE_NAME;

/// Session token from the request's `Cookie` headers.
///
/// The first non-empty `uuid` cookie wins, in header order. Headers that are
/// not valid UTF-8 and malformed pairs are skipped.
pub(crate) fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_owned())
}

/// Session cookie: no `Expires`/`Max-Age`, so it lives as long as the browser session.
pub(crate) fn session_cookie(session_id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, session_id))
        .path("/")
        .same_site(SameSite::Strict)
        .build()
}
