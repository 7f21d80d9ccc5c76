//! Core domain types for tic-tac-toe against the CPU.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player (X, always moves first).
    Player,
    /// The CPU opponent (O).
    Opponent,
}

impl Mark {
    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions that are still empty, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty squares show their 1-based number so a terminal user can pick them.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.squares[idx] {
                    Square::Empty => write!(f, "{}", idx + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Waiting for the human.
    PlayerTurn,
    /// The CPU reply is scheduled.
    OpponentTurn,
}

impl Turn {
    /// The mark that moves on this turn.
    pub fn mark(self) -> Mark {
        match self {
            Turn::PlayerTurn => Mark::Player,
            Turn::OpponentTurn => Mark::Opponent,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The human completed a line.
    PlayerWon,
    /// The CPU completed a line.
    OpponentWon,
    /// Board full, no line.
    Draw,
}

impl GameStatus {
    /// True for every status except `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Session score counters. Survive game resets, not process restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Games won by the human.
    pub player_wins: u32,
    /// Games won by the CPU.
    pub opponent_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scores {
    /// Total completed games this session.
    pub fn games_played(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_numbers_empty_squares() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::Player));
        board.set(Position::TopLeft, Square::Occupied(Mark::Opponent));
        assert_eq!(board.to_string(), "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_empty_positions_in_index_order() {
        let mut board = Board::new();
        board.set(Position::TopCenter, Square::Occupied(Mark::Player));
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 8);
        assert_eq!(empty[0], Position::TopLeft);
        assert_eq!(empty[1], Position::TopRight);
    }

    #[test]
    fn test_games_played() {
        let scores = Scores {
            player_wins: 2,
            opponent_wins: 1,
            draws: 3,
        };
        assert_eq!(scores.games_played(), 6);
    }
}
