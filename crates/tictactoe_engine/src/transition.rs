//! The transition function: moves and resets over immutable states.

use super::contracts::{Contract, MoveContract};
use super::error::MoveRejection;
use super::rules::evaluate;
use super::{GameState, Position};
use tracing::{debug, info, instrument, warn};

/// Places the current player's mark at `cell_index`, reporting rejections.
///
/// On acceptance the new state has the mark written, the move counter
/// incremented, the turn flipped to the opponent and the phase evaluated
/// from the resulting board.
///
/// # Errors
///
/// - [`MoveRejection::OutOfRange`] if `cell_index` is not in 0-8
/// - [`MoveRejection::GameOver`] if the game is already won or drawn
/// - [`MoveRejection::SquareOccupied`] if the square is taken
/// - [`MoveRejection::InvariantViolation`] if the move counter would
///   overflow, or if a postcondition fails (checked in debug builds)
#[instrument(skip(state), fields(player = %state.current_player(), moves = state.moves_played()))]
pub fn try_move(state: &GameState, cell_index: i64) -> Result<GameState, MoveRejection> {
    let pos = Position::try_from(cell_index)?;
    MoveContract::pre(state, &pos)?;

    let mover = *state.current_player();
    let board = state.board().with_mark(pos, mover);
    let moves_played = state.moves_played().checked_add(1).ok_or_else(|| {
        MoveRejection::InvariantViolation("Move counter overflow".to_string())
    })?;
    let current_player = mover.opponent();
    // Flip first, then evaluate: the winner is the opponent of the new current player.
    let phase = evaluate(&board, moves_played, current_player);

    let next = GameState::from_parts(board, moves_played, current_player, phase);

    #[cfg(debug_assertions)]
    MoveContract::post(state, &next)?;

    if next.is_over() {
        info!(position = %pos, %phase, "Game finished");
    } else {
        debug!(position = %pos, next = %current_player, "Move accepted");
    }
    Ok(next)
}

/// Places the current player's mark at `cell_index`.
///
/// Illegal moves (out-of-range index, occupied square, finished game) are
/// no-ops: the returned state equals `state`.
pub fn attempt_move(state: &GameState, cell_index: i64) -> GameState {
    try_move(state, cell_index).unwrap_or_else(|rejection| {
        match rejection {
            MoveRejection::OutOfRange(_) | MoveRejection::InvariantViolation(_) => {
                warn!(%rejection, "Move rejected")
            }
            MoveRejection::SquareOccupied(_) | MoveRejection::GameOver(_) => {
                debug!(%rejection, "Move ignored")
            }
        }
        state.clone()
    })
}

/// Returns the initial state, whatever phase `state` is in.
#[instrument(skip(state), fields(phase = %state.phase()))]
pub fn reset(state: &GameState) -> GameState {
    info!(moves = state.moves_played(), "Game reset");
    GameState::new()
}
