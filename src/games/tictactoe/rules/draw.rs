//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use super::win::has_win;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board on which neither mark holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
        && has_win(board, Mark::Player).is_none()
        && has_win(board, Mark::Opponent).is_none()
}
