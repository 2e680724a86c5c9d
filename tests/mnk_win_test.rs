//! Exhaustive win detection checks over small boards.

use strictly_mnk::{Board, Move, Symbol, has_win, winner, winning_line};

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Cells of a run of `len` starting at `(row, col)`, if it fits on the board.
fn run_cells(
    size: usize,
    row: usize,
    col: usize,
    (dr, dc): (isize, isize),
    len: usize,
) -> Option<Vec<Move>> {
    (0..len)
        .map(|i| {
            let r = row.checked_add_signed(dr * i as isize)?;
            let c = col.checked_add_signed(dc * i as isize)?;
            (r < size && c < size).then(|| Move::new(r, c))
        })
        .collect()
}

/// Every (size, win_length, run) combination with 1 ≤ K ≤ N ≤ 6.
fn all_runs() -> Vec<(usize, usize, Vec<Move>)> {
    let mut runs = Vec::new();
    for size in 1..=6 {
        for win_length in 1..=size {
            for row in 0..size {
                for col in 0..size {
                    for dir in DIRECTIONS {
                        if let Some(cells) = run_cells(size, row, col, dir, win_length) {
                            runs.push((size, win_length, cells));
                        }
                    }
                }
            }
        }
    }
    runs
}

#[test]
fn test_planted_run_wins() {
    for (size, win_length, cells) in all_runs() {
        for symbol in [Symbol::X, Symbol::O] {
            let mut board = Board::new(size, win_length).unwrap();
            for mv in &cells {
                board.play(*mv, symbol).unwrap();
            }
            assert!(has_win(&board, symbol), "{} K={} {:?}", size, win_length, cells);
            assert!(!has_win(&board, symbol.opponent()));
            assert_eq!(winner(&board), Some(symbol));
            assert_eq!(winning_line(&board, symbol).map(|line| line.len()), Some(win_length));
        }
    }
}

#[test]
fn test_run_with_empty_gap_does_not_win() {
    for (size, win_length, cells) in all_runs() {
        for gap in 0..cells.len() {
            let mut board = Board::new(size, win_length).unwrap();
            for (i, mv) in cells.iter().enumerate() {
                if i != gap {
                    board.play(*mv, Symbol::X).unwrap();
                }
            }
            assert!(
                !has_win(&board, Symbol::X),
                "{} K={} gap {} in {:?}",
                size,
                win_length,
                gap,
                cells
            );
            assert_eq!(winning_line(&board, Symbol::X), None);
        }
    }
}

#[test]
fn test_run_broken_by_opponent_does_not_win() {
    for (size, win_length, cells) in all_runs() {
        for gap in 0..cells.len() {
            let mut board = Board::new(size, win_length).unwrap();
            for (i, mv) in cells.iter().enumerate() {
                let symbol = if i == gap { Symbol::O } else { Symbol::X };
                board.play(*mv, symbol).unwrap();
            }
            assert!(!has_win(&board, Symbol::X));
            // A single opposing mark is itself a run only when K = 1.
            assert_eq!(has_win(&board, Symbol::O), win_length == 1);
        }
    }
}

#[test]
fn test_empty_board_never_wins() {
    for size in 1..=6 {
        for win_length in 1..=size {
            let board = Board::new(size, win_length).unwrap();
            assert!(!has_win(&board, Symbol::X));
            assert!(!has_win(&board, Symbol::O));
        }
    }
}

#[test]
fn test_full_line_when_k_equals_n() {
    let board = Board::parse("O.../O.../O.../O...", 4).unwrap();
    assert!(has_win(&board, Symbol::O));
    let board = Board::parse("O.../O.../O.../X...", 4).unwrap();
    assert!(!has_win(&board, Symbol::O));
}

#[test]
fn test_has_win_does_not_mutate() {
    let board = Board::parse("XO./OX./..X", 3).unwrap();
    let before = board.clone();
    for _ in 0..3 {
        assert!(has_win(&board, Symbol::X));
        assert!(!has_win(&board, Symbol::O));
    }
    assert_eq!(board, before);
}
