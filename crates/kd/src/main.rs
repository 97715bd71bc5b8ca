//! KD CLI - Documentation content engine.
//!
//! Provides commands for:
//! - `serve`: Start the content API server
//! - `check`: Validate sidebar and samples
//! - `nav`: Print the flattened navigation
//! - `sample`: Print a code sample

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs, SampleArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// KD - Documentation content engine.
#[derive(Parser)]
#[command(name = "kd", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the content API server.
    Serve(ServeArgs),
    /// Validate content and report what was loaded.
    Check(CheckArgs),
    /// Print the flattened navigation with resolved paths.
    Nav(NavArgs),
    /// Print a code sample, or list the languages of a topic.
    Sample(SampleArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Check(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Sample(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
