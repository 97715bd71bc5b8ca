//! Navigation tree and code sample registry for KD.
//!
//! This crate provides:
//! - [`Navigation`]: validated sidebar tree with path resolution and
//!   active-chain lookup
//! - [`SampleRegistry`]: per-topic code samples keyed by SDK language
//! - [`Content`]: both of the above, loaded once and shared read-only
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use kd_site::Content;
//!
//! let content = Content::builtin()?;
//!
//! // Resolve the sidebar chain for a page
//! let chain = content
//!     .navigation()
//!     .active_chain("/send-notifications/designing-workflows/template-editor")
//!     .expect("page exists");
//! assert_eq!(chain.leaf().title, "Template editor");
//!
//! // Fetch a snippet
//! let code = content.samples().lookup("unset-channel-data", "python")?;
//! assert!(code.contains("unset_channel_data"));
//! # Ok(())
//! # }
//! ```

mod content;
mod navigation;
mod samples;

pub use content::{Content, ContentError, ContentSource, SAMPLES_DIRNAME, SIDEBAR_FILENAME};
pub use navigation::{
    ActiveChain, BreadcrumbItem, MAX_DEPTH, NavEntry, NavItem, NavKind, NavNode, Navigation,
    NavigationError, normalize_path,
};
pub use samples::{LookupMiss, SampleError, SampleRegistry, SampleSet, Snippet};
