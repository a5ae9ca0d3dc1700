//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe with a play-again loop
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in a full-screen terminal UI
    Tui {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,
    },

    /// Play over plain stdin/stdout, one command per line
    Lines {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,
    },
}
