use axum::{
    response::Redirect,
    routing::get,
    Router,
};
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::DEFAULT_LIST_PATH;
use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = Router::new()
        .route("/static/styles.css", get(handlers::assets::stylesheet))
        .route("/static/list.js", get(handlers::assets::list_script))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ));

    Router::new()
        .route("/", get(|| async { Redirect::to(DEFAULT_LIST_PATH) }))
        .route("/elements", get(handlers::elements::elements_index))
        .route("/elements/:id", get(handlers::elements::element_detail))
        .route(
            "/object-templates/:template_id/elements",
            get(handlers::elements::template_elements),
        )
        .merge(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
