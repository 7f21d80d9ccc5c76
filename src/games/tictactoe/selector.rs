//! Greedy one-ply move selection for the CPU opponent.
//!
//! The opponent looks exactly one move ahead: finish its own line, stop
//! the human's line, take the center, otherwise play anywhere. A human
//! who sets up two threats at once beats it.

use super::rules::LINES;
use super::{Board, Mark, Position, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// One rule of the opponent heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Complete a line the opponent already holds two squares of.
    WinNow,
    /// Fill the gap in a line the human holds two squares of.
    Block,
    /// Take the center square.
    Center,
    /// Any empty square, uniformly.
    Random,
}

/// Rules in priority order; the first that yields a square decides.
pub const STRATEGY: [Rule; 4] = [Rule::WinNow, Rule::Block, Rule::Center, Rule::Random];

impl Rule {
    fn apply<R: Rng>(self, board: &Board, empty: &[Position], rng: &mut R) -> Option<Position> {
        match self {
            Rule::WinNow => completing_square(board, Mark::Opponent),
            Rule::Block => completing_square(board, Mark::Player),
            Rule::Center => board.is_empty(Position::Center).then_some(Position::Center),
            Rule::Random => {
                if empty.is_empty() {
                    None
                } else {
                    Some(empty[rng.random_range(0..empty.len())])
                }
            }
        }
    }
}

/// First line (in `LINES` order) where `mark` holds two squares and the
/// third is empty; returns that empty square.
#[instrument(skip(board))]
pub fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let squares = line.positions();
        let held = squares
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(mark))
            .count();
        let gap = squares.iter().copied().find(|pos| board.is_empty(*pos));
        if held == 2 { gap } else { None }
    })
}

/// Chooses the opponent's next square.
///
/// # Panics
///
/// Panics if the board has no empty square. The game engine never asks
/// for a move once the board is full, so this is a state machine bug.
#[instrument(skip(board, rng))]
pub fn choose_opponent_move<R: Rng>(board: &Board, rng: &mut R) -> Position {
    let empty = board.empty_positions();
    assert!(!empty.is_empty(), "opponent move requested on a full board");

    for rule in STRATEGY {
        if let Some(pos) = rule.apply(board, &empty, rng) {
            debug!(?rule, position = %pos, "Opponent chose square");
            return pos;
        }
    }

    unreachable!("Random rule always yields a square while one is empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const X: Option<Mark> = Some(Mark::Player);
    const O: Option<Mark> = Some(Mark::Opponent);
    const E: Option<Mark> = None;

    fn board_from(marks: [Option<Mark>; 9]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.iter().zip(marks) {
            if let Some(mark) = mark {
                board.set(*pos, Square::Occupied(mark));
            }
        }
        board
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_from([O, O, E, X, X, E, E, E, E]);
        assert_eq!(choose_opponent_move(&board, &mut rng()), Position::TopRight);
    }

    #[test]
    fn test_blocks_human_line() {
        let board = board_from([X, X, E, E, O, E, E, E, E]);
        assert_eq!(choose_opponent_move(&board, &mut rng()), Position::TopRight);
    }

    #[test]
    fn test_takes_center_on_empty_board() {
        assert_eq!(
            choose_opponent_move(&Board::new(), &mut rng()),
            Position::Center
        );
    }

    #[test]
    fn test_takes_center_after_corner_opening() {
        let board = board_from([X, E, E, E, E, E, E, E, E]);
        assert_eq!(choose_opponent_move(&board, &mut rng()), Position::Center);
    }

    #[test]
    fn test_win_uses_first_line_in_order() {
        // O completes either the middle row (at 5) or the left column (at 6);
        // X threatens the bottom row at 6. The row is scanned first.
        let board = board_from([O, X, X, O, O, E, E, X, X]);
        assert_eq!(
            choose_opponent_move(&board, &mut rng()),
            Position::MiddleRight
        );
    }

    #[test]
    fn test_gap_anywhere_in_line() {
        let board = board_from([X, E, X, E, O, E, E, E, E]);
        assert_eq!(
            completing_square(&board, Mark::Player),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let board = board_from([X, X, O, E, E, E, E, E, E]);
        assert_eq!(completing_square(&board, Mark::Player), None);
    }

    #[test]
    fn test_random_fallback_picks_empty_square() {
        // Center taken, no two-in-a-line for either mark.
        let board = board_from([E, E, E, E, X, E, E, E, E]);
        let mut rng = rng();
        for _ in 0..100 {
            let pos = choose_opponent_move(&board, &mut rng);
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_random_fallback_is_reproducible() {
        let board = board_from([E, E, E, E, X, E, E, E, E]);
        let first = choose_opponent_move(&board, &mut StdRng::seed_from_u64(42));
        let second = choose_opponent_move(&board, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_last_square() {
        // X O X / X O O / O X _
        let board = board_from([X, O, X, X, O, O, O, X, E]);
        assert_eq!(
            choose_opponent_move(&board, &mut rng()),
            Position::BottomRight
        );
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_full_board_panics() {
        let board = board_from([X, O, X, X, O, O, O, X, X]);
        choose_opponent_move(&board, &mut rng());
    }
}
