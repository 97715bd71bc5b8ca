//! Navigation API endpoints.
//!
//! Returns the navigation tree and the site-wide link list.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use kd_site::{NavEntry, NavItem};
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Navigation tree items.
    items: Vec<NavItem>,
}

/// Response for GET /api/links.
#[derive(Serialize)]
pub(crate) struct LinksResponse {
    links: Vec<LinkResponse>,
}

#[derive(Serialize)]
struct LinkResponse {
    title: String,
    path: String,
    depth: usize,
}

impl From<&NavEntry> for LinkResponse {
    fn from(entry: &NavEntry) -> Self {
        Self {
            title: entry.title.clone(),
            path: entry.path.clone(),
            depth: entry.depth,
        }
    }
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Json<NavigationResponse> {
    let items = state.content.navigation().items();
    Json(NavigationResponse { items })
}

/// Handle GET /api/links.
pub(crate) async fn get_links(State(state): State<Arc<AppState>>) -> Json<LinksResponse> {
    let links = state
        .content
        .navigation()
        .flatten()
        .into_iter()
        .map(LinkResponse::from)
        .collect();
    Json(LinksResponse { links })
}
