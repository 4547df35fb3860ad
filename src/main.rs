//! basetools CLI entry point
//!
//! Parses arguments, sets up logging from the global flags, runs the command and
//! reports failures as user-friendly errors.

use anyhow::Result;
use basetools::cli;
use basetools::core::user_friendly_error;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(level: Option<&str>) {
    let Some(level) = level else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    init_logging(config.log_level.as_deref());

    match cli.execute_with_config(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
