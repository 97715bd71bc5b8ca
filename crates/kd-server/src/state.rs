//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use kd_site::Content;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Validated site content, read-only after load.
    pub(crate) content: Arc<Content>,
    /// Enable verbose output (log lookup misses).
    pub(crate) verbose: bool,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
