//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kd_site::LookupMiss;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No navigation node serves the given path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Sample topic or language is not available.
    #[error(transparent)]
    Sample(#[from] LookupMiss),

    /// Response serialization failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            Self::Sample(LookupMiss::UnknownTopic(topic)) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Sample not found", "topic": topic}),
            ),
            Self::Sample(LookupMiss::UnknownLanguage { topic, language }) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Sample not found", "topic": topic, "language": language}),
            ),
            Self::Json(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
