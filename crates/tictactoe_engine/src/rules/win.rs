//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight lines that win the game: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the player whose marks fill it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Player)> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let sq = board.get(a);
        sq.player()
            .filter(|_| sq == board.get(b) && sq == board.get(c))
            .map(|player| (line, player))
    })
}

/// Checks whether either player has three in a row.
pub fn has_winning_line(board: &Board) -> bool {
    winning_line(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert!(!has_winning_line(&Board::new()));
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(
            winning_line(&board),
            Some((WINNING_LINES[0], Player::X))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .with_mark(Position::TopRight, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomLeft, Player::O);
        assert_eq!(
            winning_line(&board),
            Some((WINNING_LINES[7], Player::O))
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::O)
            .with_mark(Position::TopRight, Player::X);
        assert!(!has_winning_line(&board));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let board = line
                .iter()
                .fold(Board::new(), |b, pos| b.with_mark(*pos, Player::O));
            assert_eq!(winning_line(&board), Some((line, Player::O)));
        }
    }
}
