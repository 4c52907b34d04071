//! Tic-tac-toe as an explicit state machine.
//!
//! The engine is a pure transition function over an immutable
//! [`GameState`] value. Two commands drive it:
//!
//! - [`attempt_move`] places the current player's mark, or returns the
//!   state unchanged when the move is not legal.
//! - [`reset`] returns the initial state from any phase.
//!
//! Terminal status ([`Phase`]) is derived from the board after every
//! accepted move. [`GameEngine`] is a small owning controller for
//! presentation layers that want to hold one current state and replace it
//! on each command.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Phase, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.attempt_move(cell);
//! }
//! assert_eq!(engine.state().phase(), &Phase::WonBy(Player::X));
//!
//! engine.reset();
//! assert_eq!(*engine.state().moves_played(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod command;
mod contracts;
mod engine;
mod error;
mod invariants;
mod phase;
mod position;
mod rules;
mod state;
mod transition;
mod types;

// Crate-level exports - Domain types
pub use phase::Phase;
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Player, Square};

// Crate-level exports - Commands and transitions
pub use command::{Command, apply, replay};
pub use engine::GameEngine;
pub use transition::{attempt_move, reset, try_move};

// Crate-level exports - Rules
pub use rules::{MAX_MOVES, WINNING_LINES, has_winning_line, is_draw, winning_line};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, GamePlaying, LegalMove, MoveContract, SquareIsEmpty};
pub use error::{InvalidState, MoveRejection};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, MovesMatchBoardInvariant, PhaseMatchesBoardInvariant,
};
