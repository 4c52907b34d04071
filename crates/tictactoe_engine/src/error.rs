//! Move rejection reasons.

use super::invariants::InvariantViolation;
use super::phase::Phase;
use super::position::Position;

/// Why a move was not accepted.
///
/// The unchecked [`attempt_move`](crate::attempt_move) path turns every
/// rejection into a no-op; [`try_move`](crate::try_move) surfaces it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The cell index is not one of the nine grid positions.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(i64),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over ({})", _0)]
    GameOver(Phase),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveRejection {}

/// A state snapshot that breaks one or more game invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidState {
    violations: Vec<InvariantViolation>,
}

impl InvalidState {
    /// Wraps the violations found while checking a snapshot.
    pub fn new(violations: Vec<InvariantViolation>) -> Self {
        Self { violations }
    }

    /// The invariants the snapshot breaks.
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }
}

impl std::fmt::Display for InvalidState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptions = self
            .violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Inconsistent game state: {}", descriptions)
    }
}

impl std::error::Error for InvalidState {}
