//! Sidebar and breadcrumb markup.

use kd_site::{ActiveChain, BreadcrumbItem, Navigation};

use crate::html::escape_html;

/// Render the sidebar tree.
///
/// When `active_path` matches a node, that node's link gets
/// `aria-current="page"` and every item on its chain gets the `active` class.
/// Unknown paths render the tree without highlighting.
#[must_use]
pub fn render_sidebar(nav: &Navigation, active_path: Option<&str>) -> String {
    let chain = active_path.and_then(|path| nav.active_chain(path));

    let mut output = String::with_capacity(nav.len() * 96 + 64);
    output.push_str(r#"<nav class="sidebar" aria-label="Documentation">"#);
    render_list(nav, nav.roots(), chain.as_ref(), &mut output);
    output.push_str("</nav>");
    output
}

fn render_list(
    nav: &Navigation,
    indices: &[usize],
    chain: Option<&ActiveChain<'_>>,
    output: &mut String,
) {
    if indices.is_empty() {
        return;
    }

    output.push_str("<ul>");
    for &idx in indices {
        let Some(entry) = nav.entry(idx) else {
            continue;
        };

        let kind = if entry.is_section {
            "sidebar-section"
        } else {
            "sidebar-page"
        };
        let active = if chain.is_some_and(|c| c.contains(idx)) {
            " active"
        } else {
            ""
        };
        let current = if chain.is_some_and(|c| c.leaf_index() == idx) {
            r#" aria-current="page""#
        } else {
            ""
        };

        output.push_str(&format!(
            r#"<li class="{kind}{active}"><a href="{}"{current}>{}</a>"#,
            escape_html(&entry.path),
            escape_html(&entry.title)
        ));
        render_list(nav, nav.children(idx), chain, output);
        output.push_str("</li>");
    }
    output.push_str("</ul>");
}

/// Render breadcrumbs as an ordered list of links.
///
/// Returns an empty string when there are no items.
#[must_use]
pub fn render_breadcrumbs(items: &[BreadcrumbItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut output = String::from(r#"<nav class="breadcrumbs" aria-label="Breadcrumb"><ol>"#);
    for item in items {
        output.push_str(&format!(
            r#"<li><a href="{}">{}</a></li>"#,
            escape_html(&item.path),
            escape_html(&item.title)
        ));
    }
    output.push_str("</ol></nav>");
    output
}

#[cfg(test)]
mod tests {
    use kd_site::NavNode;
    use pretty_assertions::assert_eq;

    use super::*;

    fn nav() -> Navigation {
        Navigation::new(vec![
            NavNode::section(
                "Send notifications",
                "/send-notifications",
                vec![
                    NavNode::section(
                        "Designing workflows",
                        "/designing-workflows",
                        vec![
                            NavNode::page("Overview", "/"),
                            NavNode::page("Template editor", "/template-editor"),
                        ],
                    ),
                    NavNode::page("Triggering workflows", "/triggering-workflows"),
                ],
            ),
            NavNode::page("Security & compliance", "/security"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_sidebar_without_active_path() {
        let html = render_sidebar(&nav(), None);

        assert!(html.starts_with(r#"<nav class="sidebar" aria-label="Documentation"><ul>"#));
        assert!(!html.contains("active"));
        assert!(!html.contains("aria-current"));
        assert!(html.contains(
            r#"<li class="sidebar-page"><a href="/send-notifications/triggering-workflows">Triggering workflows</a></li>"#
        ));
    }

    #[test]
    fn test_render_sidebar_highlights_active_chain() {
        let html = render_sidebar(
            &nav(),
            Some("/send-notifications/designing-workflows/template-editor"),
        );

        assert!(html.contains(
            r#"<li class="sidebar-section active"><a href="/send-notifications">Send notifications</a>"#
        ));
        assert!(html.contains(
            r#"<li class="sidebar-section active"><a href="/send-notifications/designing-workflows">Designing workflows</a>"#
        ));
        assert!(html.contains(
            r#"<li class="sidebar-page active"><a href="/send-notifications/designing-workflows/template-editor" aria-current="page">Template editor</a></li>"#
        ));
        assert!(html.contains(
            r#"<li class="sidebar-page"><a href="/send-notifications/triggering-workflows">Triggering workflows</a></li>"#
        ));
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn test_render_sidebar_landing_page_is_current() {
        let html = render_sidebar(&nav(), Some("/send-notifications/designing-workflows"));

        assert!(html.contains(
            r#"<li class="sidebar-page active"><a href="/send-notifications/designing-workflows" aria-current="page">Overview</a></li>"#
        ));
    }

    #[test]
    fn test_render_sidebar_unknown_path_has_no_highlight() {
        let html = render_sidebar(&nav(), Some("/nonexistent"));

        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn test_render_sidebar_escapes_titles() {
        let html = render_sidebar(&nav(), None);

        assert!(html.contains("Security &amp; compliance"));
    }

    #[test]
    fn test_render_breadcrumbs() {
        let nav = nav();
        let items = nav.breadcrumbs("/send-notifications/triggering-workflows");

        let html = render_breadcrumbs(&items);

        assert_eq!(
            html,
            concat!(
                r#"<nav class="breadcrumbs" aria-label="Breadcrumb"><ol>"#,
                r#"<li><a href="/">Home</a></li>"#,
                r#"<li><a href="/send-notifications">Send notifications</a></li>"#,
                "</ol></nav>",
            )
        );
    }

    #[test]
    fn test_render_breadcrumbs_empty() {
        assert_eq!(render_breadcrumbs(&[]), "");
    }
}
