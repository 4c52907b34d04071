//! Contract-based validation for moves.
//!
//! Contracts state what must hold before a move is applied and what the
//! transition must guarantee afterwards: {P} move {Q}.

use super::error::MoveRejection;
use super::invariants::{GameInvariants, InvariantSet};
use super::{GameState, Position, Square};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveRejection>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game is still being played.
pub struct GamePlaying;

impl GamePlaying {
    /// Rejects any move once the phase is terminal.
    pub fn check(state: &GameState) -> Result<(), MoveRejection> {
        if state.is_playing() {
            Ok(())
        } else {
            Err(MoveRejection::GameOver(*state.phase()))
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveRejection> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal while playing onto an empty square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveRejection> {
        GamePlaying::check(state)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move transitions.
///
/// Preconditions:
/// - Phase is `Playing`
/// - Square is empty
///
/// Postconditions:
/// - Exactly one square changed, from empty to the mover's mark
/// - Move counter grew by exactly one
/// - All [`GameInvariants`] hold on the new state
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveRejection> {
        LegalMove::check(*pos, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveRejection> {
        let mut problems = Vec::new();

        let changed: Vec<_> = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(b, a)| b != a)
            .collect();
        match changed.as_slice() {
            [(Square::Empty, Square::Occupied(p))] if p == before.current_player() => {}
            _ => problems.push("Exactly one empty square receives the mover's mark".to_string()),
        }

        if *after.moves_played() != before.moves_played() + 1 {
            problems.push("Move counter increases by one per accepted move".to_string());
        }

        if let Err(violations) = GameInvariants::check_all(after) {
            problems.extend(violations.into_iter().map(|v| v.description));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            warn!(?problems, "Move postcondition failed");
            Err(MoveRejection::InvariantViolation(format!(
                "Postcondition failed: {}",
                problems.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Phase, Player, attempt_move};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = attempt_move(&GameState::new(), 4);
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(MoveRejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(GameState::new(), |s, cell| attempt_move(&s, cell));
        // Occupied and terminal: the terminal phase is reported.
        assert_eq!(
            MoveContract::pre(&state, &Position::TopLeft),
            Err(MoveRejection::GameOver(Phase::WonBy(Player::X)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = attempt_move(&before, 4);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        // Two marks appear in one step.
        let board = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        let after = GameState::from_parts(board, 1, Player::O, Phase::Playing);

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(matches!(err, MoveRejection::InvariantViolation(_)));
        assert!(err.to_string().contains("Exactly one empty square"));
    }
}
