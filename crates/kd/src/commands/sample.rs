//! `kd sample` command implementation.

use clap::Args;
use kd_renderer::language_label;

use super::ContentArgs;
use crate::error::CliError;
use crate::output::{Emphasis, Output};

/// Arguments for the sample command.
#[derive(Args)]
pub(crate) struct SampleArgs {
    /// Topic key (e.g. `cancel`, `set-channel-data`).
    topic: String,

    /// Language id; omit to list the languages of the topic.
    language: Option<String>,

    #[command(flatten)]
    content: ContentArgs,
}

impl SampleArgs {
    /// Execute the sample command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Sample`] when the topic or language is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let content = self.content.load()?;
        let samples = content.samples();

        let Some(language) = &self.language else {
            let set = samples
                .topic(&self.topic)
                .ok_or_else(|| kd_site::LookupMiss::UnknownTopic(self.topic.clone()))?;
            for lang in set.languages() {
                output.result(
                    &format!("{lang}  ({})", language_label(lang)),
                    Emphasis::Plain,
                );
            }
            return Ok(());
        };

        let code = samples.lookup(&self.topic, language)?;
        output.result(code.trim_end(), Emphasis::Plain);
        Ok(())
    }
}
