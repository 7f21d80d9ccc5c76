//! Game engine: the synchronous state machine for one session.
//!
//! `Game` owns the board, the phase and the session scores. It never
//! sleeps or spawns anything; each accepted transition returns an
//! [`Effect`] telling the caller which delayed task to schedule next.

use super::action::{Ignored, Move};
use super::contracts::{Contract, MoveContract};
use super::phases::{Outcome, Phase};
use super::rules::{self, WinningLine};
use super::Position;
use super::selector::choose_opponent_move;
use super::types::{Board, GameStatus, Mark, Scores, Square, Turn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Follow-up work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Nothing to schedule.
    None,
    /// The CPU must reply after the opponent delay.
    ScheduleOpponentMove,
    /// The game ended; reset after the reset delay.
    ScheduleReset,
}

/// Tic-tac-toe session engine.
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) board: Board,
    pub(super) phase: Phase,
    pub(super) scores: Scores,
    pub(super) winning_line: Option<WinningLine>,
    pub(super) history: Vec<Move>,
}

impl Game {
    /// Creates a new session: empty board, human to move, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self::with_scores(Scores::default())
    }

    /// Creates a fresh game carrying over existing scores.
    #[instrument]
    pub fn with_scores(scores: Scores) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::PlayerTurn,
            scores,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the session scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the moves of the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the line that ended the game, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Handles the human selecting the cell at `index` (0-8).
    ///
    /// Invalid selections leave the game untouched and come back as `Err`.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn select_cell(&mut self, index: usize) -> Result<Effect, Ignored> {
        let position = Position::from_index(index).ok_or(Ignored::OutOfRange(index))?;
        self.place(Move::new(Mark::Player, position))
    }

    /// Lets the CPU reply if its move is pending.
    ///
    /// Returns `None` when no reply is due, so a stale timer cannot mark
    /// a board that has moved on.
    #[instrument(skip(self, rng), fields(phase = ?self.phase))]
    pub fn play_opponent<R: Rng>(&mut self, rng: &mut R) -> Option<Effect> {
        if self.phase != Phase::OpponentPending {
            debug!("No opponent move pending");
            return None;
        }

        let position = choose_opponent_move(&self.board, rng);
        match self.place(Move::new(Mark::Opponent, position)) {
            Ok(effect) => Some(effect),
            Err(reason) => panic!("CPU chose an illegal move at {}: {}", position, reason),
        }
    }

    /// Clears the board for a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(scores = ?self.scores, "Resetting board");
        *self = Self::with_scores(self.scores);
    }

    /// Immutable view for the UI.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            turn: self.phase.turn(),
            status: self.phase.status(),
            scores: self.scores,
            winning_line: self.winning_line,
            history: self.history.clone(),
        }
    }

    /// Validates and applies a move, then settles the phase.
    fn place(&mut self, action: Move) -> Result<Effect, Ignored> {
        if let Err(reason) = MoveContract::pre(self, &action) {
            debug!(%action, %reason, "Move ignored");
            return Err(reason);
        }

        let before = cfg!(debug_assertions).then(|| self.clone());

        self.board.set(action.position, Square::Occupied(action.mark));
        self.history.push(action);
        debug!(%action, "Move applied");

        let effect = match rules::evaluate(&self.board, action.mark) {
            Some(verdict) => {
                self.finish(verdict.outcome, verdict.line);
                Effect::ScheduleReset
            }
            None => match action.mark {
                Mark::Player => {
                    self.phase = Phase::OpponentPending;
                    Effect::ScheduleOpponentMove
                }
                Mark::Opponent => {
                    self.phase = Phase::PlayerTurn;
                    Effect::None
                }
            },
        };

        if let Some(before) = before
            && let Err(violations) = MoveContract::post(&before, self)
        {
            panic!("Invariant violated after {}: {:?}", action, violations);
        }

        Ok(effect)
    }

    /// Enters `GameOver`, counting the outcome exactly once.
    fn finish(&mut self, outcome: Outcome, line: Option<WinningLine>) {
        match outcome {
            Outcome::PlayerWon => self.scores.player_wins += 1,
            Outcome::OpponentWon => self.scores.opponent_wins += 1,
            Outcome::Draw => self.scores.draws += 1,
        }
        self.phase = Phase::GameOver(outcome);
        self.winning_line = line;
        info!(%outcome, scores = ?self.scores, "Game over");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only state handed to the UI after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The nine squares.
    pub board: Board,
    /// Whose move it is; `None` once the game is over.
    pub turn: Option<Turn>,
    /// Progress of the current game.
    pub status: GameStatus,
    /// Session scores.
    pub scores: Scores,
    /// Line to highlight.
    pub winning_line: Option<WinningLine>,
    /// Moves of the current game.
    pub history: Vec<Move>,
}

impl Snapshot {
    /// Status line for the UI, derived from the stored status.
    pub fn status_message(&self) -> &'static str {
        match (self.status, self.turn) {
            (GameStatus::PlayerWon, _) => "player won",
            (GameStatus::OpponentWon, _) => "opponent won",
            (GameStatus::Draw, _) => "draw",
            (GameStatus::InProgress, Some(Turn::OpponentTurn)) => "opponent's turn",
            (GameStatus::InProgress, _) => "player's turn",
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Game::new().snapshot()
    }
}
