//! Tic-tac-toe against a greedy CPU opponent.

mod action;
mod contracts;
mod game;
mod invariants;
mod phases;
mod position;
pub mod rules;
pub mod selector;
mod types;

pub use action::{Ignored, Move, Selection};
pub use contracts::{Contract, LegalMove, MoveContract};
pub use game::{Effect, Game, Snapshot};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants};
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use rules::{LINES, WinningLine, has_win, is_full};
pub use selector::{STRATEGY, choose_opponent_move};
pub use types::{Board, GameStatus, Mark, Scores, Square, Turn};
