//! Move counter invariant: `moves_played` equals the number of filled squares.

use super::super::GameState;
use super::Invariant;

/// Invariant: the move counter agrees with the board.
///
/// The counter is redundant with the board but is what draw detection
/// reads, so the two must never drift apart.
pub struct MovesMatchBoardInvariant;

impl Invariant<GameState> for MovesMatchBoardInvariant {
    fn holds(state: &GameState) -> bool {
        usize::from(*state.moves_played()) == state.board().filled()
    }

    fn description() -> &'static str {
        "Move counter equals the number of occupied squares"
    }
}
