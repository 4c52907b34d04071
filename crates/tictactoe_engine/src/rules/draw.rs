//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::has_winning_line;

/// Number of accepted moves that fills the board.
pub const MAX_MOVES: u8 = 9;

/// A game is drawn when all nine moves have been played and no line is won.
///
/// The move counter, not a board scan, decides when the board is full.
pub fn is_draw(board: &Board, moves_played: u8) -> bool {
    moves_played == MAX_MOVES && !has_winning_line(board)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn fill(marks: [(Position, Player); 9]) -> Board {
        marks
            .into_iter()
            .fold(Board::new(), |b, (pos, player)| b.with_mark(pos, player))
    }

    #[test]
    fn test_partial_board_is_not_draw() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_draw(&board, 1));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O X X / O X O
        let board = fill([
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(board.filled(), 9);
        assert!(is_draw(&board, MAX_MOVES));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X / O O X / X O O
        let board = fill([
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert!(!is_draw(&board, MAX_MOVES));
    }
}
