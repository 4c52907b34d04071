//! Phase invariant: the stored phase is what the rules derive from the board.

use super::super::GameState;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: `phase` agrees with terminal evaluation of the board.
///
/// Exactly one phase holds, and a won or drawn board is never reported as
/// still playing.
pub struct PhaseMatchesBoardInvariant;

impl Invariant<GameState> for PhaseMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        *state.phase() == evaluate(state.board(), *state.moves_played(), *state.current_player())
    }

    fn description() -> &'static str {
        "Phase matches the win/draw evaluation of the board"
    }
}
