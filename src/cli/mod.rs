//! Command-line interface for basetools.
//!
//! # Commands
//!
//! - `render` - Expand templates against variables and write the results
//! - `guid` - Convert GUIDs between registry and C structure formats
//!
//! # Global Options
//!
//! - `--verbose` / `-v`: Debug logging
//! - `--quiet` / `-q`: No logging
//! - `--no-progress`: Disable the progress indicator
//!
//! # Examples
//!
//! ```bash
//! # Render a header, variables from a file plus command-line overrides
//! basetools render AutoGen.h.template --vars vars.toml --output-dir Build \
//!     -- --scalar MODULE Shell --list GUID gEfiA gEfiB
//!
//! # GUID conversions
//! basetools guid to-struct 8be4df61-93ca-11d2-aa0d-00e098032b8c
//! basetools guid to-registry "{0x8be4df61, 0x93ca, 0x11d2, {0xaa, 0x0d, 0x00, 0xe0, 0x98, 0x03, 0x2b, 0x8c}}"
//! ```

pub mod args;
mod guid;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Runtime configuration for CLI execution.
///
/// Collected from the global flags once and handed to each command, so commands
/// never consult global flags or environment state on their own.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter for the tracing subscriber. `None` disables logging.
    pub log_level: Option<String>,

    /// Whether to disable the progress indicator.
    pub no_progress: bool,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_no_progress(mut self, no_progress: bool) -> Self {
        self.no_progress = no_progress;
        self
    }
}

#[derive(Parser)]
#[command(
    name = "basetools",
    about = "Build tool helpers - template expansion and GUID conversion",
    version,
    long_about = "Expands ${BEGIN}/${END} templates into generated sources, \
                  rewriting outputs only when they change, and converts GUIDs between formats."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable the progress indicator
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand templates against variables
    Render(render::RenderCommand),

    /// Convert GUIDs between formats
    Guid(guid::GuidCommand),
}

impl Cli {
    /// Maps global flags onto a [`CliConfig`].
    ///
    /// `--verbose` selects `debug`, `--quiet` disables logging, and otherwise
    /// `RUST_LOG` applies with `info` as the fallback.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress,
        }
    }

    /// Executes the command with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Render(cmd) => cmd.execute(&config).await,
            Commands::Guid(cmd) => cmd.execute(),
        }
    }
}
