//! `kd check` command implementation.

use clap::Args;
use kd_site::ContentSource;

use super::ContentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    content: ContentArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns the first content error; nothing is reported as valid unless the
    /// whole tree and every sample file pass.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let content = self.content.load()?;

        let source = match content.source() {
            ContentSource::Builtin => "built-in content".to_owned(),
            ContentSource::Directory(dir) => dir.display().to_string(),
        };
        let navigation = content.navigation();
        let samples = content.samples();

        output.passed(&format!("{source}: OK"));
        output.note(&format!(
            "  {} navigation nodes, {} unique paths",
            navigation.len(),
            navigation.flatten().len()
        ));
        output.note(&format!(
            "  {} sample topics, {} snippets",
            samples.len(),
            samples.iter().map(|s| s.snippets().len()).sum::<usize>()
        ));

        let undescribed = navigation
            .roots()
            .iter()
            .filter_map(|&i| navigation.entry(i))
            .filter(|e| e.is_section && e.description.is_none())
            .count();
        if undescribed > 0 {
            output.warning(&format!(
                "  {undescribed} top-level section(s) without a description"
            ));
        }

        Ok(())
    }
}
