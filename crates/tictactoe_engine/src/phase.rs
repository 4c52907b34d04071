//! Game phase: playing, or one of the two terminal outcomes.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Phase of a game.
///
/// `WonBy` and `Draw` are terminal: moves are ignored until a reset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Moves are being accepted.
    #[default]
    #[display("playing")]
    Playing,
    /// A player completed a line.
    #[display("won by {}", _0)]
    WonBy(Player),
    /// The board filled with no completed line.
    #[display("draw")]
    Draw,
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Playing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::WonBy(player) => Some(*player),
            Phase::Playing | Phase::Draw => None,
        }
    }

    /// Short tag for views: `"playing"`, `"winner"` or `"draw"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::WonBy(_) => "winner",
            Phase::Draw => "draw",
        }
    }
}
