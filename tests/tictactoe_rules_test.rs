//! Win and draw detection checked against every possible board.

use strictly_cpu::rules::{evaluate, is_draw};
use strictly_cpu::{Board, LINES, Mark, Outcome, Square, has_win, is_full};

/// Every assignment of {empty, X, O} to nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Mark::Player),
                _ => Square::Occupied(Mark::Opponent),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

fn line_held(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| {
        line.positions()
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(mark))
    })
}

#[test]
fn test_has_win_matches_line_scan_on_every_board() {
    for board in all_boards() {
        for mark in [Mark::Player, Mark::Opponent] {
            let found = has_win(&board, mark);
            assert_eq!(found.is_some(), line_held(&board, mark), "{}", board);
            if let Some(line) = found {
                let first = LINES
                    .iter()
                    .position(|l| *l == line)
                    .expect("line comes from LINES");
                for skipped in &LINES[..first] {
                    assert!(
                        skipped
                            .positions()
                            .iter()
                            .any(|p| board.get(*p) != Square::Occupied(mark)),
                        "earlier line skipped on\n{}",
                        board
                    );
                }
            }
        }
    }
}

#[test]
fn test_draw_only_on_full_board_without_line() {
    for board in all_boards() {
        let expected = is_full(&board)
            && has_win(&board, Mark::Player).is_none()
            && has_win(&board, Mark::Opponent).is_none();
        assert_eq!(is_draw(&board), expected, "{}", board);
    }
}

#[test]
fn test_win_takes_precedence_over_full_board() {
    // X X X / O O X / X O O
    let x = Square::Occupied(Mark::Player);
    let o = Square::Occupied(Mark::Opponent);
    let board = Board::from_squares([x, x, x, o, o, x, x, o, o]);

    let verdict = evaluate(&board, Mark::Player).expect("terminal board");
    assert_eq!(verdict.outcome, Outcome::PlayerWon);
    assert_eq!(verdict.line, Some(LINES[0]));
}

#[test]
fn test_open_board_has_no_verdict() {
    let x = Square::Occupied(Mark::Player);
    let mut squares = [Square::Empty; 9];
    squares[0] = x;
    squares[1] = x;
    assert_eq!(evaluate(&Board::from_squares(squares), Mark::Player), None);
}
