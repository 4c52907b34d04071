//! Owning controller around the transition function.

use super::command::{Command, apply};
use super::transition::{attempt_move, reset, try_move};
use super::{GameState, MoveRejection};
use tracing::instrument;

/// Tic-tac-toe game engine.
///
/// Holds exactly one current [`GameState`] and replaces it wholesale on
/// every command. Read access goes through [`GameEngine::state`]; there is
/// no way to mutate the state other than the commands below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Resumes from an existing state snapshot.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Attempts a move; illegal moves leave the state unchanged.
    pub fn attempt_move(&mut self, cell_index: i64) -> &GameState {
        self.state = attempt_move(&self.state, cell_index);
        &self.state
    }

    /// Attempts a move and reports why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveRejection`]; the current state is kept as it was.
    pub fn try_move(&mut self, cell_index: i64) -> Result<&GameState, MoveRejection> {
        self.state = try_move(&self.state, cell_index)?;
        Ok(&self.state)
    }

    /// Resets to the initial state.
    pub fn reset(&mut self) -> &GameState {
        self.state = reset(&self.state);
        &self.state
    }

    /// Applies a [`Command`].
    pub fn dispatch(&mut self, command: Command) -> &GameState {
        self.state = apply(&self.state, command);
        &self.state
    }

    /// Consumes the engine, returning its state.
    pub fn into_state(self) -> GameState {
        self.state
    }
}
