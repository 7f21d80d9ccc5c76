//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Both win detection and the opponent heuristic scan in this order.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first line fully held by `mark`, if any.
#[instrument(skip(board))]
pub fn has_win(board: &Board, mark: Mark) -> Option<WinningLine> {
    LINES.iter().copied().find(|line| {
        line.positions()
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(mark))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(has_win(&board, Mark::Player), None);
        assert_eq!(has_win(&board, Mark::Opponent), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::Player));
        board.set(Position::TopCenter, Square::Occupied(Mark::Player));
        board.set(Position::TopRight, Square::Occupied(Mark::Player));
        assert_eq!(has_win(&board, Mark::Player), Some(LINES[0]));
        assert_eq!(has_win(&board, Mark::Opponent), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Mark::Opponent));
        board.set(Position::Center, Square::Occupied(Mark::Opponent));
        board.set(Position::BottomLeft, Square::Occupied(Mark::Opponent));
        assert_eq!(has_win(&board, Mark::Opponent), Some(LINES[7]));
    }

    #[test]
    fn test_first_line_in_order_reported() {
        // Top row and left column both complete; the row comes first.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Mark::Player));
        }
        assert_eq!(has_win(&board, Mark::Player), Some(LINES[0]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::Player));
        board.set(Position::TopCenter, Square::Occupied(Mark::Player));
        assert_eq!(has_win(&board, Mark::Player), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::Player));
        board.set(Position::TopCenter, Square::Occupied(Mark::Opponent));
        board.set(Position::TopRight, Square::Occupied(Mark::Player));
        assert_eq!(has_win(&board, Mark::Player), None);
        assert_eq!(has_win(&board, Mark::Opponent), None);
    }
}
