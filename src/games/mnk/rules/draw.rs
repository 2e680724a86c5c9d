//! Draw detection and outcome derivation.

use super::win::has_win;
use crate::games::mnk::{Board, GameOutcome, Symbol};
use tracing::instrument;

/// A full board with no run for either player.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_win(board, Symbol::X) && !has_win(board, Symbol::O)
}

/// Derives the game outcome from the board.
///
/// X is checked before O; a legal game never has both.
#[instrument(skip(board), fields(notation = %board.notation()))]
pub fn outcome(board: &Board) -> GameOutcome {
    if has_win(board, Symbol::X) {
        GameOutcome::Win(Symbol::X)
    } else if has_win(board, Symbol::O) {
        GameOutcome::Win(Symbol::O)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
