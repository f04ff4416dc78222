use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::models::AppState;

// Embed the default assets in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../../static/styles.css");
pub const LIST_SCRIPT: &str = include_str!("../../static/list.js");

pub async fn stylesheet(State(state): State<AppState>) -> impl IntoResponse {
    let css = state.custom_css.clone().unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());
    ([(header::CONTENT_TYPE, "text/css")], css)
}

pub async fn list_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], LIST_SCRIPT)
}
