//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here mutates state;
//! the game engine decides what to do with the verdict.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, has_win};

use super::phases::Outcome;
use super::{Board, Mark};
use tracing::instrument;

/// Terminal verdict for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// How the game ended.
    pub outcome: Outcome,
    /// The completed line, absent for a draw.
    pub line: Option<WinningLine>,
}

/// Evaluates the board right after `mover` placed a mark.
///
/// Wins are checked before fullness, so a full board with a line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Mark) -> Option<Verdict> {
    if let Some(line) = has_win(board, mover) {
        return Some(Verdict {
            outcome: Outcome::won_by(mover),
            line: Some(line),
        });
    }

    if is_full(board) {
        return Some(Verdict {
            outcome: Outcome::Draw,
            line: None,
        });
    }

    None
}
