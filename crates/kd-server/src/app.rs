//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/links", get(handlers::navigation::get_links))
        .route("/api/pages/", get(handlers::pages::get_root_page))
        .route("/api/pages/{*path}", get(handlers::pages::get_page))
        .route("/api/samples", get(handlers::samples::list_samples))
        .route("/api/samples/{topic}", get(handlers::samples::get_topic))
        .route(
            "/api/samples/{topic}/{language}",
            get(handlers::samples::get_snippet),
        );

    let mut router = Router::new()
        .merge(api_routes)
        .layer(TraceLayer::new_for_http());
    for layer in security::header_layers() {
        router = router.layer(layer);
    }
    router.with_state(state)
}
