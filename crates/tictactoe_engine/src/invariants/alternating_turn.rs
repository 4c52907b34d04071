//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// After an even number of moves X is to move, after an odd number O is.
/// Terminal states keep the post-move flip, so this holds for them too.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = if state.moves_played() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        *state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Phase, Position, attempt_move};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut state = GameState::new();
        for cell in [0, 4, 8, 2, 6] {
            state = attempt_move(&state, cell);
            assert!(AlternatingTurnInvariant::holds(&state));
        }
    }

    #[test]
    fn test_same_player_twice_violates() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let state = GameState::from_parts(board, 1, Player::X, Phase::Playing);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
