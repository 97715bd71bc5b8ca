//! HTML fragments for KD pages.
//!
//! The page layout shell owns the header, footer and styling. This crate
//! renders the pieces it injects:
//! - [`render_sidebar`]: navigation tree with active-chain highlighting
//! - [`render_breadcrumbs`]: ancestor links for the current page
//! - [`render_sample_tabs`]: accessible tabs with one code block per SDK language
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use kd_renderer::{render_sample_tabs, render_sidebar};
//! use kd_site::Content;
//!
//! let content = Content::builtin()?;
//! let sidebar = render_sidebar(content.navigation(), Some("/send-notifications/canceling-workflows"));
//! assert!(sidebar.contains(r#"aria-current="page""#));
//!
//! if let Some(set) = content.samples().topic("cancel") {
//!     let tabs = render_sample_tabs(set, 0);
//!     assert!(tabs.contains(r#"role="tablist""#));
//! }
//! # Ok(())
//! # }
//! ```

mod html;
mod language;
mod sidebar;
mod tabs;

pub use html::escape_html;
pub use language::{highlight_language, language_label};
pub use sidebar::{render_breadcrumbs, render_sidebar};
pub use tabs::{render_sample_tabs, render_sample_tabs_for};
