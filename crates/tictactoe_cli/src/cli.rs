//! Command-line interface for the tic-tac-toe front end.

use super::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe - play or replay games against the state-machine engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game on stdin/stdout
    Play,

    /// Replay moves and print the final state
    Replay {
        /// Comma-separated cell indices, e.g. "0,3,1,4,2"
        #[arg(short, long, conflicts_with = "script", allow_hyphen_values = true)]
        moves: Option<String>,

        /// File of JSON-lines commands ({"type":"play","cell":4} or {"type":"reset"})
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
}
