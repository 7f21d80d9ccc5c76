//! Alternating turn invariant: Player, Opponent, Player, ...

use super::super::{Game, Mark, Phase};
use super::Invariant;

/// Invariant: marks alternate, the human moves first, and the phase agrees
/// with the number of moves made.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Mark::Player } else { Mark::Opponent };
            mov.mark == expected
        });
        if !alternates {
            return false;
        }

        match game.phase() {
            Phase::PlayerTurn => history.len() % 2 == 0,
            Phase::OpponentPending => history.len() % 2 == 1,
            Phase::GameOver(_) => true,
        }
    }

    fn description() -> &'static str {
        "Marks alternate starting with the player"
    }
}
