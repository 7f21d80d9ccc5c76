//! Phases of a single game and the outcome stored when it ends.

use super::types::{GameStatus, Mark, Turn};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human completed a line.
    PlayerWon,
    /// The CPU completed a line.
    OpponentWon,
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Outcome for a line completed by `mark`.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => Outcome::PlayerWon,
            Mark::Opponent => Outcome::OpponentWon,
        }
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWon => GameStatus::PlayerWon,
            Outcome::OpponentWon => GameStatus::OpponentWon,
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to select a cell.
    PlayerTurn,
    /// The CPU reply is scheduled but not applied yet.
    OpponentPending,
    /// Finished; a reset is scheduled.
    GameOver(Outcome),
}

impl Phase {
    /// Active turn, `None` once the game is over.
    pub fn turn(self) -> Option<Turn> {
        match self {
            Phase::PlayerTurn => Some(Turn::PlayerTurn),
            Phase::OpponentPending => Some(Turn::OpponentTurn),
            Phase::GameOver(_) => None,
        }
    }

    /// Status derived from the phase.
    pub fn status(self) -> GameStatus {
        match self {
            Phase::GameOver(outcome) => outcome.into(),
            Phase::PlayerTurn | Phase::OpponentPending => GameStatus::InProgress,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PlayerWon => write!(f, "player won"),
            Outcome::OpponentWon => write!(f, "opponent won"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
