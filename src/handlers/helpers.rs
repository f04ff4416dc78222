use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;

/// Header set by the refresh script (and most AJAX libraries).
pub const REQUESTED_WITH: &str = "x-requested-with";

/// Whether the caller only wants the list container, not the whole page.
pub fn is_partial_request(headers: &HeaderMap) -> bool {
    headers
        .get(REQUESTED_WITH)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false)
}

/// Bare status page; `s` is inserted unescaped, so pass fixed text only.
pub fn plain_html<S: AsRef<str>>(status: StatusCode, s: S) -> Response {
    let body = format!("<!DOCTYPE html><html><body><p>{}</p></body></html>", s.as_ref());
    (status, Html(body)).into_response()
}

pub fn render_template<T: askama::Template>(t: T) -> Result<Response, AppError> {
    let body = t.render()?;
    Ok(Html(body).into_response())
}
