//! Commands that drive the state machine.
//!
//! Presentation layers translate their input events into [`Command`]s and
//! feed them through [`apply`]. Commands are serializable so a game can be
//! scripted or shipped over any channel as data.

use super::GameState;
use super::transition::{attempt_move, reset};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An input to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Place the current player's mark at a cell index.
    #[display("play {}", cell)]
    Play {
        /// Cell index; anything outside 0-8 is rejected as a no-op.
        cell: i64,
    },
    /// Start over from the initial state.
    #[display("reset")]
    Reset,
}

/// Applies one command to `state`, returning the next state.
pub fn apply(state: &GameState, command: Command) -> GameState {
    match command {
        Command::Play { cell } => attempt_move(state, cell),
        Command::Reset => reset(state),
    }
}

/// Folds a sequence of commands from the initial state.
#[instrument(skip(commands))]
pub fn replay(commands: impl IntoIterator<Item = Command>) -> GameState {
    commands
        .into_iter()
        .fold(GameState::new(), |state, command| apply(&state, command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Phase, Player};

    #[test]
    fn test_replay_plays_and_resets() {
        let commands = [
            Command::Play { cell: 0 },
            Command::Play { cell: 1 },
            Command::Reset,
            Command::Play { cell: 8 },
        ];
        let state = replay(commands);
        assert_eq!(*state.moves_played(), 1);
        assert_eq!(*state.current_player(), Player::O);
    }

    #[test]
    fn test_commands_deserialize_from_json() {
        let play: Command = serde_json::from_str(r#"{"type":"play","cell":4}"#).unwrap();
        let reset: Command = serde_json::from_str(r#"{"type":"reset"}"#).unwrap();
        assert_eq!(play, Command::Play { cell: 4 });
        assert_eq!(reset, Command::Reset);
    }

    #[test]
    fn test_replay_scenario_a() {
        let state = replay([0, 3, 1, 4, 2].map(|cell| Command::Play { cell }));
        assert_eq!(*state.phase(), Phase::WonBy(Player::X));
    }
}
