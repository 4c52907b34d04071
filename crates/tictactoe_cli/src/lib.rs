//! Terminal front end for the tic-tac-toe engine.
//!
//! The engine owns the rules; this crate only turns terminal input into
//! engine commands and renders the state the engine exposes.
//!
//! # Architecture
//!
//! - **Cli**: clap argument parsing (`play`, `replay`)
//! - **Config**: optional TOML settings for output format and prompt
//! - **Session**: hot-seat loop over any `BufRead`/`Write` pair
//! - **Script**: move lists and JSON-lines command files for replay

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod script;
mod session;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError, DEFAULT_CONFIG_FILE, OutputFormat};
pub use render::{Snapshot, board_text, render};
pub use script::{ScriptError, load_script, parse_moves, parse_script};
pub use session::{Input, Session};
