//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
pub(crate) mod sample;
pub(crate) mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use sample::SampleArgs;
pub(crate) use serve::ServeArgs;

use std::path::PathBuf;

use clap::Args;
use kd_config::{CliSettings, Config};
use kd_site::Content;

use crate::error::CliError;

/// Options shared by commands that read content.
#[derive(Args, Debug)]
pub(crate) struct ContentArgs {
    /// Path to configuration file (default: auto-discover kd.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory with sidebar.yaml and samples/ (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl ContentArgs {
    /// Load configuration and the content it points at.
    pub(crate) fn load(&self) -> Result<Content, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config = ?config.config_path, "Configuration loaded");
        Ok(Content::load(config.content_resolved.source_dir.as_deref())?)
    }
}
