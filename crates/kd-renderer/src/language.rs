//! SDK language identifiers.
//!
//! Sample files key snippets by short identifiers (`node`, `csharp`, ...).
//! These helpers map them to tab labels and to syntax highlighter names.

/// Display label for a language tab.
///
/// Unknown identifiers are returned unchanged.
#[must_use]
pub fn language_label(id: &str) -> &str {
    match id {
        "curl" => "cURL",
        "node" => "Node.js",
        "javascript" => "JavaScript",
        "python" => "Python",
        "ruby" => "Ruby",
        "csharp" => "C#",
        "elixir" => "Elixir",
        "php" => "PHP",
        "go" => "Go",
        "java" => "Java",
        _ => id,
    }
}

/// Highlighter language for the `language-*` class of a code block.
#[must_use]
pub fn highlight_language(id: &str) -> &str {
    match id {
        "curl" => "bash",
        "node" => "javascript",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_label_known() {
        assert_eq!(language_label("csharp"), "C#");
        assert_eq!(language_label("node"), "Node.js");
        assert_eq!(language_label("curl"), "cURL");
    }

    #[test]
    fn test_language_label_unknown_falls_back_to_id() {
        assert_eq!(language_label("kotlin"), "kotlin");
    }

    #[test]
    fn test_highlight_language() {
        assert_eq!(highlight_language("curl"), "bash");
        assert_eq!(highlight_language("node"), "javascript");
        assert_eq!(highlight_language("python"), "python");
    }
}
