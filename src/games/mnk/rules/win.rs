//! Win detection for arbitrary board size and win length.

use crate::games::mnk::{Board, Cell, Move, Symbol};

/// Scan directions: →, ↓, ↘, ↙.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks if `symbol` has `win_length` consecutive marks in any row,
/// column or diagonal.
///
/// Every cell is tried as the start of a window in each direction, so
/// boards with K < N (several windows per line) are handled. Pure; the
/// search calls this at every node.
pub fn has_win(board: &Board, symbol: Symbol) -> bool {
    winning_start(board, symbol).is_some()
}

/// Returns the cells of the first winning run found for `symbol`, in scan
/// order from its start cell.
pub fn winning_line(board: &Board, symbol: Symbol) -> Option<Vec<Move>> {
    let (start, (dr, dc)) = winning_start(board, symbol)?;
    let line = (0..board.win_length())
        .filter_map(|i| step(board, start, dr, dc, i))
        .collect();
    Some(line)
}

/// Returns the player with a winning run, checking X before O.
pub fn winner(board: &Board) -> Option<Symbol> {
    [Symbol::X, Symbol::O]
        .into_iter()
        .find(|symbol| has_win(board, *symbol))
}

fn winning_start(board: &Board, symbol: Symbol) -> Option<(Move, (isize, isize))> {
    let size = board.size();
    let target = Cell::Occupied(symbol);

    for row in 0..size {
        for col in 0..size {
            if board.get(row, col) != Some(target) {
                continue;
            }
            let start = Move::new(row, col);
            for &(dr, dc) in &DIRECTIONS {
                let complete = (1..board.win_length()).all(|i| {
                    step(board, start, dr, dc, i).and_then(|mv| board.cell(mv)) == Some(target)
                });
                if complete {
                    return Some((start, (dr, dc)));
                }
            }
        }
    }

    None
}

/// The cell `i` steps from `start` along `(dr, dc)`, if it is on the board.
fn step(board: &Board, start: Move, dr: isize, dc: isize, i: usize) -> Option<Move> {
    let i = isize::try_from(i).ok()?;
    let row = start.row.checked_add_signed(dr * i)?;
    let col = start.col.checked_add_signed(dc * i)?;
    (row < board.size() && col < board.size()).then(|| Move::new(row, col))
}
