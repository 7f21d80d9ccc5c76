//! First-class move types and the reasons a selection is ignored.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who placed the mark.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark.symbol(), self.position.label())
    }
}

/// Why a move was dropped without changing the game.
///
/// Not an error: invalid input from the UI is expected and simply ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Ignored {
    /// Index outside 0-8.
    #[display("Index {} is off the board", _0)]
    OutOfRange(usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The mark does not own the current turn.
    #[display("It's not {:?}'s turn", _0)]
    NotYourTurn(Mark),

    /// The game has ended and is waiting for its reset.
    #[display("Game is already over")]
    GameOver,
}

/// Result of forwarding a cell selection to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// The mark was placed.
    Accepted,
    /// Nothing changed.
    Ignored(Ignored),
}

impl Selection {
    /// True when the mark was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Selection::Accepted)
    }
}
