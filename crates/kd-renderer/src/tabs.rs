//! Accessible tabs for code samples.
//!
//! # Output HTML Structure
//!
//! ```html
//! <div class="tabs code-samples" id="tabs-0" data-topic="cancel">
//!   <div class="tabs-buttons" role="tablist">
//!     <button role="tab" id="tab-0-python" aria-controls="panel-0-python"
//!             aria-selected="true" tabindex="0">Python</button>
//!     <button role="tab" id="tab-0-ruby" aria-controls="panel-0-ruby"
//!             aria-selected="false" tabindex="-1">Ruby</button>
//!   </div>
//!   <div role="tabpanel" id="panel-0-python" aria-labelledby="tab-0-python">
//!     <pre><code class="language-python">...</code></pre>
//!   </div>
//!   <div role="tabpanel" id="panel-0-ruby" aria-labelledby="tab-0-ruby" hidden>
//!     <pre><code class="language-ruby">...</code></pre>
//!   </div>
//! </div>
//! ```

use kd_site::{SampleSet, Snippet};

use crate::html::escape_html;
use crate::language::{highlight_language, language_label};

/// Render every snippet of a sample set as tabs, in authored order.
///
/// `group_id` distinguishes several tab groups on one page.
#[must_use]
pub fn render_sample_tabs(set: &SampleSet, group_id: usize) -> String {
    let snippets: Vec<&Snippet> = set.snippets().iter().collect();
    render_tabs(set.topic(), &snippets, group_id)
}

/// Render tabs for the requested languages only.
///
/// Languages the set does not define are skipped; tab order follows
/// `languages`. Returns an empty string when none are available.
#[must_use]
pub fn render_sample_tabs_for(set: &SampleSet, languages: &[&str], group_id: usize) -> String {
    let snippets: Vec<&Snippet> = languages
        .iter()
        .filter_map(|lang| set.snippets().iter().find(|s| s.language == *lang))
        .collect();
    render_tabs(set.topic(), &snippets, group_id)
}

fn render_tabs(topic: &str, snippets: &[&Snippet], group_id: usize) -> String {
    if snippets.is_empty() {
        return String::new();
    }

    let mut output = String::with_capacity(
        snippets.iter().map(|s| s.code.len()).sum::<usize>() + 256 * snippets.len(),
    );

    // Container div
    output.push_str(&format!(
        r#"<div class="tabs code-samples" id="tabs-{group_id}" data-topic="{}">"#,
        escape_html(topic)
    ));

    // Tab buttons
    output.push_str(r#"<div class="tabs-buttons" role="tablist">"#);
    for (idx, snippet) in snippets.iter().enumerate() {
        let selected = idx == 0;
        let lang = escape_html(&snippet.language);
        output.push_str(&format!(
            r#"<button role="tab" id="tab-{group_id}-{lang}" aria-controls="panel-{group_id}-{lang}" aria-selected="{selected}" tabindex="{}">{}</button>"#,
            if selected { "0" } else { "-1" },
            escape_html(language_label(&snippet.language))
        ));
    }
    output.push_str("</div>");

    // Tab panels
    for (idx, snippet) in snippets.iter().enumerate() {
        let hidden = if idx == 0 { "" } else { " hidden" };
        let lang = escape_html(&snippet.language);
        output.push_str(&format!(
            r#"<div role="tabpanel" id="panel-{group_id}-{lang}" aria-labelledby="tab-{group_id}-{lang}"{hidden}><pre><code class="language-{}">{}</code></pre></div>"#,
            escape_html(highlight_language(&snippet.language)),
            escape_html(&snippet.code)
        ));
    }

    output.push_str("</div>");
    output
}
