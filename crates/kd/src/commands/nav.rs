//! `kd nav` command implementation.

use clap::Args;
use kd_site::Navigation;

use super::ContentArgs;
use crate::error::CliError;
use crate::output::{Emphasis, Output};

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    content: ContentArgs,

    /// Highlight the active chain for this path.
    #[arg(short, long)]
    active: Option<String>,
}

/// Marker for a line in the listing.
#[derive(Debug, PartialEq, Eq)]
enum Mark {
    None,
    Ancestor,
    Current,
}

impl NavArgs {
    /// Execute the nav command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let content = self.content.load()?;
        let navigation = content.navigation();

        if let Some(active) = &self.active
            && navigation.active_chain(active).is_none()
        {
            output.warning(&format!("No page is served at {active}"));
        }

        for (line, mark) in listing(navigation, self.active.as_deref()) {
            match mark {
                Mark::Current => output.result(&line, Emphasis::Strong),
                Mark::Ancestor => output.result(&line, Emphasis::Plain),
                Mark::None if self.active.is_some() => output.result(&line, Emphasis::Muted),
                Mark::None => output.result(&line, Emphasis::Plain),
            }
        }

        Ok(())
    }
}

/// Lines of the flattened navigation, indented by depth.
fn listing(navigation: &Navigation, active: Option<&str>) -> Vec<(String, Mark)> {
    let chain = active.and_then(|path| navigation.active_chain(path));

    navigation
        .flatten()
        .into_iter()
        .map(|entry| {
            let mark = match &chain {
                Some(c) if c.leaf().path == entry.path => Mark::Current,
                Some(c) if c.ancestors().any(|a| a.path == entry.path) => Mark::Ancestor,
                _ => Mark::None,
            };
            let indent = "  ".repeat(entry.depth);
            (format!("{indent}{}  {}", entry.title, entry.path), mark)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use kd_site::NavNode;
    use pretty_assertions::assert_eq;

    use super::*;

    fn nav() -> Navigation {
        Navigation::new(vec![NavNode::section(
            "Send notifications",
            "/send-notifications",
            vec![
                NavNode::page("Triggering workflows", "/triggering-workflows"),
                NavNode::page("Canceling workflows", "/canceling-workflows"),
            ],
        )])
        .unwrap()
    }

    #[test]
    fn test_listing_indents_by_depth() {
        let lines = listing(&nav(), None);

        assert_eq!(
            lines,
            vec![
                (
                    "Send notifications  /send-notifications".to_owned(),
                    Mark::None
                ),
                (
                    "  Triggering workflows  /send-notifications/triggering-workflows".to_owned(),
                    Mark::None
                ),
                (
                    "  Canceling workflows  /send-notifications/canceling-workflows".to_owned(),
                    Mark::None
                ),
            ]
        );
    }

    #[test]
    fn test_listing_marks_active_chain() {
        let lines = listing(&nav(), Some("/send-notifications/canceling-workflows/"));

        let marks: Vec<&Mark> = lines.iter().map(|(_, m)| m).collect();
        assert_eq!(marks, vec![&Mark::Ancestor, &Mark::None, &Mark::Current]);
    }

    #[test]
    fn test_listing_unknown_active_path() {
        let lines = listing(&nav(), Some("/nowhere"));

        assert!(lines.iter().all(|(_, m)| *m == Mark::None));
    }
}
