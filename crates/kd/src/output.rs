//! Terminal output for `kd` commands.
//!
//! Command results (listings, snippets) go to stdout so they can be piped.
//! Progress, warnings and errors go to stderr.

use console::{Style, Term};

/// How a result line stands out from its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Emphasis {
    Plain,
    /// The line the user asked about.
    Strong,
    /// Context around the line the user asked about.
    Muted,
}

pub(crate) struct Output {
    results: Term,
    status: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            results: Term::stdout(),
            status: Term::stderr(),
        }
    }

    /// Print a command result line.
    pub(crate) fn result(&self, line: &str, emphasis: Emphasis) {
        let style = match emphasis {
            Emphasis::Plain => Style::new(),
            Emphasis::Strong => Style::new().cyan().bold(),
            Emphasis::Muted => Style::new().dim(),
        };
        let _ = self.results.write_line(&style.apply_to(line).to_string());
    }

    /// Print a progress note.
    pub(crate) fn note(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    /// Print a passed check (green).
    pub(crate) fn passed(&self, msg: &str) {
        self.styled_status(msg, &Style::new().green());
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.styled_status(msg, &Style::new().yellow());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.styled_status(msg, &Style::new().red());
    }

    fn styled_status(&self, msg: &str, style: &Style) {
        let _ = self.status.write_line(&style.apply_to(msg).to_string());
    }
}
