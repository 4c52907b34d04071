//! Rendering of engine state for the terminal.

use super::config::{CliConfig, OutputFormat};
use serde::Serialize;
use tictactoe_engine::{GameState, Player, Position, Square};

/// JSON view of a state, with the derived fields a front end needs.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// The raw engine state.
    #[serde(flatten)]
    pub state: &'a GameState,
    /// `"playing"`, `"winner"` or `"draw"`.
    pub status: &'static str,
    /// The winner, once there is one.
    pub winner: Option<Player>,
    /// Positions that would accept a move right now.
    pub valid_moves: Vec<usize>,
}

impl<'a> From<&'a GameState> for Snapshot<'a> {
    fn from(state: &'a GameState) -> Self {
        Self {
            state,
            status: state.phase().tag(),
            winner: state.winner(),
            valid_moves: state.valid_moves().into_iter().map(usize::from).collect(),
        }
    }
}

/// Draws the board as a text grid.
///
/// With hints on, empty squares show their cell number.
pub fn board_text(state: &GameState, show_hints: bool) -> String {
    let board = state.board();
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| match board.get(*pos) {
                    Square::Occupied(player) => format!(" {} ", player),
                    Square::Empty if show_hints => format!(" {} ", pos.to_index()),
                    Square::Empty => "   ".to_string(),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Renders a state in the configured format.
pub fn render(state: &GameState, config: &CliConfig) -> anyhow::Result<String> {
    match config.format() {
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            board_text(state, *config.show_hints()),
            state.status_string()
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&Snapshot::from(state))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::attempt_move;

    #[test]
    fn test_board_text_with_and_without_hints() {
        let state = attempt_move(&GameState::new(), 4);
        assert_eq!(
            board_text(&state, true),
            " 0 | 1 | 2 \n---+---+---\n 3 | X | 5 \n---+---+---\n 6 | 7 | 8 "
        );
        assert_eq!(
            board_text(&state, false),
            "   |   |   \n---+---+---\n   | X |   \n---+---+---\n   |   |   "
        );
    }

    #[test]
    fn test_json_snapshot_fields() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(GameState::new(), |s, cell| attempt_move(&s, cell));
        let config: CliConfig = toml::from_str("format = \"json\"").unwrap();
        let json: serde_json::Value = serde_json::from_str(&render(&state, &config).unwrap()).unwrap();

        assert_eq!(json["status"], "winner");
        assert_eq!(json["winner"], "X");
        assert_eq!(json["moves_played"], 5);
        assert_eq!(json["valid_moves"], serde_json::json!([]));
    }
}
