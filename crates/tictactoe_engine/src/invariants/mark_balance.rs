//! Mark balance invariant: X leads O by zero or one mark.

use super::super::{GameState, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: the board holds as many X marks as O marks, or one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Phase, Position};

    #[test]
    fn test_x_ahead_by_one_holds() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomRight, Player::X);
        let state = GameState::from_parts(board, 3, Player::O, Phase::Playing);
        assert!(MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_o_ahead_violates() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomRight, Player::X);
        let state = GameState::from_parts(board, 3, Player::O, Phase::Playing);
        assert!(!MarkBalanceInvariant::holds(&state));
    }
}
