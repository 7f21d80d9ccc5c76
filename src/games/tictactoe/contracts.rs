//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Ignored, Move};
use super::game::Game;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::phases::Phase;
use super::types::Square;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Ignored>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), Ignored> {
        match game.phase() {
            Phase::GameOver(_) => Err(Ignored::GameOver),
            Phase::PlayerTurn | Phase::OpponentPending => Ok(()),
        }
    }
}

/// Precondition: the mark owns the current turn.
pub struct MarksTurn;

impl MarksTurn {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), Ignored> {
        match game.phase().turn() {
            Some(turn) if turn.mark() == mov.mark => Ok(()),
            _ => Err(Ignored::NotYourTurn(mov.mark)),
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), Ignored> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(Ignored::SquareOccupied(mov.position))
        }
    }
}

/// Composite precondition, checked in the order the reasons are reported.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), Ignored> {
        GameNotOver::check(game)?;
        MarksTurn::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - Squares occupied before the move are unchanged
/// - Scores never decrease
/// - The game invariant set holds
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), Ignored> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let overwritten = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .any(|(was, now)| *was != Square::Empty && was != now);
        if overwritten {
            violations.push(InvariantViolation::new("Occupied square was overwritten"));
        }

        let (b, a) = (before.scores(), after.scores());
        if a.player_wins < b.player_wins
            || a.opponent_wins < b.opponent_wins
            || a.draws < b.draws
            || a.games_played() > b.games_played() + 1
        {
            violations.push(InvariantViolation::new(
                "Scores must grow by at most one game per move",
            ));
        }

        if let Err(mut set) = TicTacToeInvariants::check_all(after) {
            violations.append(&mut set);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position};

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::new();
        let action = Move::new(Mark::Player, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::new();
        game.select_cell(4).unwrap();
        game.phase = Phase::PlayerTurn;
        let action = Move::new(Mark::Player, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(Ignored::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = Game::new();
        let action = Move::new(Mark::Opponent, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(Ignored::NotYourTurn(Mark::Opponent))
        );
    }

    #[test]
    fn test_game_over_reported_before_occupancy() {
        let mut game = Game::new();
        game.select_cell(4).unwrap();
        game.phase = Phase::GameOver(crate::games::tictactoe::Outcome::Draw);
        let action = Move::new(Mark::Player, Position::Center);
        assert_eq!(MoveContract::pre(&game, &action), Err(Ignored::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.select_cell(0).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut before = Game::new();
        before.select_cell(4).unwrap();
        let mut after = before.clone();
        after.board.set(Position::Center, Square::Occupied(Mark::Opponent));
        after.history[0].mark = Mark::Opponent;

        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description.contains("overwritten"))
        );
    }

    #[test]
    fn test_postcondition_detects_score_jump() {
        let before = Game::new();
        let mut after = before.clone();
        after.scores.draws = 2;
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
