//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Rules are kept apart from state storage so
//! that transitions and invariants share one definition of "terminal".

pub mod draw;
pub mod win;

pub use draw::{MAX_MOVES, is_draw};
pub use win::{WINNING_LINES, has_winning_line, winning_line};

use super::{Board, Phase, Player};

/// Derives the phase of a position after a move has been applied.
///
/// `current_player` is the post-move player to move, so a completed line
/// is credited to its opponent, the player who just moved. Win takes
/// precedence over draw.
pub(crate) fn evaluate(board: &Board, moves_played: u8, current_player: Player) -> Phase {
    if has_winning_line(board) {
        Phase::WonBy(current_player.opponent())
    } else if is_draw(board, moves_played) {
        Phase::Draw
    } else {
        Phase::Playing
    }
}
