//! Strictly CPU - tic-tac-toe against a greedy CPU opponent
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a board snapshot
//! - **Selector**: the opponent's one-ply heuristic (win, block, center, random)
//! - **Game**: synchronous state machine owning board, phase and scores
//! - **Controller**: tokio task running a `Game`, owning the delayed CPU
//!   reply and post-game reset, publishing snapshots on a `watch` channel
//!
//! # Example
//!
//! ```no_run
//! use strictly_cpu::{GameConfig, GameController};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let controller = GameController::spawn(GameConfig::default());
//! controller.select_cell(0).await?;
//! println!("{}", controller.snapshot().status_message());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod error;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Controller
pub use controller::{GameController, TaskKind};
pub use error::ControllerError;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Contract, Effect, Game, GameStatus, Ignored, Invariant, InvariantSet,
    InvariantViolation, LINES, LegalMove, Mark, Move, MoveContract, Outcome, Phase, Position,
    STRATEGY, Scores, Selection, Snapshot, Square, TicTacToeInvariants, Turn, WinningLine,
    choose_opponent_move, has_win, is_full,
};

/// Rule functions and the opponent heuristic, by module.
pub use games::tictactoe::{rules, selector};
