//! Command sources for replay: move lists and JSON-lines scripts.

use derive_more::{Display, Error};
use std::path::Path;
use tictactoe_engine::Command;
use tracing::{debug, instrument};

/// Error reading or parsing a replay script.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a comma-separated list of cell indices into play commands.
///
/// Indices outside 0-8 parse fine; the engine rejects them on replay.
#[instrument]
pub fn parse_moves(moves: &str) -> Result<Vec<Command>, ScriptError> {
    moves
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map(|cell| Command::Play { cell })
                .map_err(|e| ScriptError::new(format!("Invalid cell index '{}': {}", s, e)))
        })
        .collect()
}

/// Parses JSON-lines commands. Blank lines and `#` comments are skipped.
pub fn parse_script(content: &str) -> Result<Vec<Command>, ScriptError> {
    content
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| {
            serde_json::from_str::<Command>(line)
                .map_err(|e| ScriptError::new(format!("Line {}: {}", n, e)))
        })
        .collect()
}

/// Reads and parses a script file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<Command>, ScriptError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ScriptError::new(format!("Failed to read script: {}", e)))?;
    let commands = parse_script(&content)?;
    debug!(count = commands.len(), "Script loaded");
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves_keeps_out_of_range() {
        let commands = parse_moves("0, 3,-1 ,9").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Play { cell: 0 },
                Command::Play { cell: 3 },
                Command::Play { cell: -1 },
                Command::Play { cell: 9 },
            ]
        );
    }

    #[test]
    fn test_parse_moves_rejects_garbage() {
        let err = parse_moves("0,x").unwrap_err();
        assert!(err.message.contains("'x'"));
    }

    #[test]
    fn test_parse_script_reports_line() {
        let content = "# opening\n{\"type\":\"play\",\"cell\":4}\n\n{\"type\":\"jump\"}\n";
        let err = parse_script(content).unwrap_err();
        assert!(err.message.starts_with("Line 4"));
    }
}
