//! Pages API endpoint.
//!
//! Returns the context a page layout needs for a resolved path: metadata,
//! breadcrumbs and sidebar markup with the active chain highlighted.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use kd_renderer::{render_breadcrumbs, render_sidebar};
use kd_site::{BreadcrumbItem, normalize_path};
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageResponse {
    /// Page metadata.
    meta: PageMeta,
    /// Breadcrumb navigation items.
    breadcrumbs: Vec<BreadcrumbResponse>,
    /// Breadcrumb HTML.
    breadcrumbs_html: String,
    /// Sidebar HTML.
    sidebar: String,
}

/// Page metadata.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    title: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    is_section: bool,
}

#[derive(Serialize)]
struct BreadcrumbResponse {
    title: String,
    path: String,
}

impl From<BreadcrumbItem> for BreadcrumbResponse {
    fn from(item: BreadcrumbItem) -> Self {
        Self {
            title: item.title,
            path: item.path,
        }
    }
}

/// Handle GET /api/pages/ (root page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl("/", &state, &headers)
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl(&path, &state, &headers)
}

fn get_page_impl(
    path: &str,
    state: &AppState,
    headers: &HeaderMap,
) -> Result<axum::response::Response, ServerError> {
    let path = normalize_path(path);
    let navigation = state.content.navigation();

    let meta = if path == "/" {
        PageMeta {
            title: "Home".to_owned(),
            path: path.clone(),
            description: None,
            is_section: false,
        }
    } else {
        let Some(entry) = navigation.find(&path) else {
            if state.verbose {
                tracing::warn!(path = %path, "No navigation entry for page");
            }
            return Err(ServerError::PageNotFound(path));
        };
        PageMeta {
            title: entry.title.clone(),
            path: entry.path.clone(),
            description: entry.description.clone(),
            is_section: entry.is_section,
        }
    };

    let breadcrumbs = navigation.breadcrumbs(&path);
    let response = PageResponse {
        breadcrumbs_html: render_breadcrumbs(&breadcrumbs),
        breadcrumbs: breadcrumbs
            .into_iter()
            .map(BreadcrumbResponse::from)
            .collect(),
        sidebar: render_sidebar(navigation, Some(&path)),
        meta,
    };

    let body = serde_json::to_string(&response)?;
    let etag = compute_etag(&state.version, &body);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
