//! Noughts - unified CLI
//!
//! Runs the play-again match loop behind a terminal UI or a line-based
//! presenter.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{LinePresenter, MatchDriver, MatchSummary, NoughtsConfig, Presenter, TerminalPresenter};
use std::path::{Path, PathBuf};
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Default filter when the TUI logs to its file.
const FILE_LOG_FILTER: &str = "info,noughts=debug";
/// Default filter in line mode. Stderr shares the terminal with the game.
const STDERR_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { config } => run_tui(config).await,
        Command::Lines { config } => run_lines(config).await,
    }
}

/// Run the match in the full-screen terminal UI
async fn run_tui(config_path: PathBuf) -> Result<()> {
    let config = NoughtsConfig::load_or_default(&config_path)?;
    initialize_file_tracing(config.log_file())?;
    info!(config = %config_path.display(), "Starting noughts TUI");

    let presenter = TerminalPresenter::new(*config.presentation())?;
    let mut driver = MatchDriver::new(presenter, *config.starting_mark());
    let summary = drive(&mut driver).await;

    // Restore the terminal before printing anything.
    drop(driver);
    report(summary?);
    Ok(())
}

/// Run the match over stdin/stdout
async fn run_lines(config_path: PathBuf) -> Result<()> {
    initialize_stderr_tracing();
    let config = NoughtsConfig::load_or_default(&config_path)?;
    info!(config = %config_path.display(), "Starting noughts line mode");

    let presenter = LinePresenter::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    let mut driver = MatchDriver::new(presenter, *config.starting_mark());
    let summary = drive(&mut driver).await?;
    report(summary);
    Ok(())
}

/// Runs the driver until it stops on its own or Ctrl+C arrives.
#[instrument(skip_all)]
async fn drive<P: Presenter>(driver: &mut MatchDriver<P>) -> Result<Option<MatchSummary>> {
    tokio::select! {
        result = driver.run() => Ok(Some(result?)),
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Interrupted");
            Ok(None)
        }
    }
}

fn report(summary: Option<MatchSummary>) {
    if let Some(summary) = summary {
        println!(
            "Sessions played: {} (X wins: {}, O wins: {}, draws: {})",
            summary.sessions(),
            summary.x_wins(),
            summary.o_wins(),
            summary.draws()
        );
    }
}

/// Logs to a file so output does not interfere with the TUI
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILE_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(STDERR_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
