//! Tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, CliConfig, Command, Session, load_script, parse_moves, render};
use tictactoe_engine::replay;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so rendered boards on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?.with_format(cli.format);

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, script } => run_replay(&config, moves, script),
    }
}

/// Run an interactive hot-seat game.
fn run_play(config: &CliConfig) -> Result<()> {
    info!("Starting hot-seat game");
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(config).run(stdin.lock(), stdout.lock())
}

/// Replay a move list or script and print the final state.
fn run_replay(
    config: &CliConfig,
    moves: Option<String>,
    script: Option<std::path::PathBuf>,
) -> Result<()> {
    let commands = match (moves, script) {
        (Some(moves), _) => parse_moves(&moves)?,
        (None, Some(path)) => load_script(&path)
            .with_context(|| format!("Replaying {}", path.display()))?,
        (None, None) => anyhow::bail!("replay needs --moves or --script"),
    };

    info!(count = commands.len(), "Replaying commands");
    let state = replay(commands);
    println!("{}", render(&state, config)?);
    Ok(())
}
