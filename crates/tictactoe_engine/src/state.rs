//! The immutable game state value.

use super::error::InvalidState;
use super::invariants::{GameInvariants, InvariantSet};
use super::phase::Phase;
use super::position::Position;
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Complete game state.
///
/// A `GameState` is never patched: every transition builds a new value and
/// the caller replaces its copy wholesale.
///
/// Deserialized snapshots are checked against [`GameInvariants`]; a
/// snapshot that no sequence of moves could produce is refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot")]
pub struct GameState {
    /// The board.
    board: Board,
    /// Number of occupied squares (0-9).
    moves_played: u8,
    /// Player whose mark the next accepted move places.
    current_player: Player,
    /// Playing, won or drawn.
    phase: Phase,
}

impl GameState {
    /// The initial state: empty board, X to move, playing.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            moves_played: 0,
            current_player: Player::X,
            phase: Phase::Playing,
        }
    }

    /// Assembles a state from its parts without checking consistency.
    pub(crate) fn from_parts(
        board: Board,
        moves_played: u8,
        current_player: Player,
        phase: Phase,
    ) -> Self {
        Self {
            board,
            moves_played,
            current_player,
            phase,
        }
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        self.phase.winner()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns true while moves are accepted.
    pub fn is_playing(&self) -> bool {
        !self.is_over()
    }

    /// Positions that would currently accept a move.
    ///
    /// Empty once the game is over, even if squares remain free.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Human-readable status line.
    pub fn status_string(&self) -> String {
        match self.phase {
            Phase::Playing => format!("In progress. Player {} to move.", self.current_player),
            Phase::WonBy(player) => format!("Game over. Player {} wins!", player),
            Phase::Draw => "Game over. Draw!".to_string(),
        }
    }
}

/// Unchecked wire form of a [`GameState`].
#[derive(Deserialize)]
struct StateSnapshot {
    board: Board,
    moves_played: u8,
    current_player: Player,
    phase: Phase,
}

impl TryFrom<StateSnapshot> for GameState {
    type Error = InvalidState;

    fn try_from(raw: StateSnapshot) -> Result<Self, Self::Error> {
        let state = Self::from_parts(raw.board, raw.moves_played, raw.current_player, raw.phase);
        GameInvariants::check_all(&state).map_err(|violations| {
            warn!(count = violations.len(), "Refusing inconsistent game state");
            InvalidState::new(violations)
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
