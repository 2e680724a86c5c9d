//! Depth-complete minimax with alpha-beta pruning.
//!
//! The search mutates one board in place. Each exploratory mark is held by a
//! [`Placement`](super::Placement) guard and removed when the guard drops,
//! so the board is back in its original state whenever a call returns,
//! including after a cutoff.
//!
//! Full-depth search is exponential in the number of empty cells. It is
//! practical up to roughly 4×4; larger boards still get exact answers but
//! may take very long.

use super::rules::has_win;
use super::{Board, MnkError, MnkErrorKind, Move, Symbol};
use tracing::{debug, info, instrument, warn};

/// Score of a position the searching player has won.
pub const WIN_SCORE: i32 = 1;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;
/// Score of a position the searching player has lost.
pub const LOSS_SCORE: i32 = -1;

/// Empty cells beyond which a search is logged as potentially slow.
const EXHAUSTIVE_LIMIT: usize = 12;

/// Chosen move plus its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the searching player.
    pub best_move: Move,
    /// Minimax score from the searching player's perspective.
    pub score: i32,
    /// Nodes visited, root included.
    pub nodes: u64,
}

/// The two sides of a search, fixed at the root.
#[derive(Debug, Clone, Copy)]
struct Sides {
    bot: Symbol,
    opponent: Symbol,
}

/// Move selection for the automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    pruning: bool,
}

impl SearchEngine {
    /// Creates an engine with alpha-beta pruning enabled.
    pub fn new() -> Self {
        Self { pruning: true }
    }

    /// Creates an engine that explores every node (plain minimax).
    pub fn unpruned() -> Self {
        Self { pruning: false }
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Whether alpha-beta pruning is enabled.
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Returns the best move for `bot`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the board is full, a side has already won,
    /// or both symbols are equal.
    pub fn choose_move(
        &self,
        board: &mut Board,
        bot: Symbol,
        opponent: Symbol,
    ) -> Result<Move, MnkError> {
        self.search(board, bot, opponent).map(|result| result.best_move)
    }

    /// Searches the position to full depth with `bot` to move.
    ///
    /// Every empty cell is scored once; the strictly greatest score wins and
    /// ties go to the first cell in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the board is full, a side has already won,
    /// or both symbols are equal.
    #[instrument(skip(self, board), fields(pruning = self.pruning, notation = %board.notation()))]
    pub fn search(
        &self,
        board: &mut Board,
        bot: Symbol,
        opponent: Symbol,
    ) -> Result<SearchResult, MnkError> {
        if bot == opponent {
            return Err(MnkError::new(MnkErrorKind::InvalidState(format!(
                "bot and opponent both play {}",
                bot
            ))));
        }

        let sides = Sides { bot, opponent };
        let empty = board.empty_count();
        if empty == 0 {
            return Err(MnkError::new(MnkErrorKind::InvalidState(
                "search requested on a full board".to_string(),
            )));
        }
        if terminal_score(board, sides).is_some() {
            return Err(MnkError::new(MnkErrorKind::InvalidState(
                "position is already decided".to_string(),
            )));
        }
        if empty > EXHAUSTIVE_LIMIT {
            warn!(
                empty,
                limit = EXHAUSTIVE_LIMIT,
                "Exhaustive search over many empty cells may be very slow"
            );
        }

        let mut nodes = 1;
        let mut alpha = i32::MIN;
        let mut best: Option<(Move, i32)> = None;

        for mv in coordinates(board.size()) {
            let Some(mut placed) = board.scoped(mv, bot) else {
                continue;
            };
            let score = self.minimax(&mut placed, sides, false, alpha, i32::MAX, &mut nodes);
            drop(placed);

            debug!(row = mv.row, col = mv.col, score, "Root move scored");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if self.pruning {
                alpha = alpha.max(score);
            }
        }

        let (best_move, score) = best.ok_or_else(|| {
            MnkError::new(MnkErrorKind::InvalidState(
                "no empty cell found to search".to_string(),
            ))
        })?;

        info!(
            row = best_move.row,
            col = best_move.col,
            score,
            nodes,
            "Search complete"
        );
        Ok(SearchResult {
            best_move,
            score,
            nodes,
        })
    }

    fn minimax(
        &self,
        board: &mut Board,
        sides: Sides,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        if let Some(score) = terminal_score(board, sides) {
            return score;
        }

        let symbol = if maximizing { sides.bot } else { sides.opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in coordinates(board.size()) {
            let Some(mut placed) = board.scoped(mv, symbol) else {
                continue;
            };
            let score = self.minimax(&mut placed, sides, !maximizing, alpha, beta, nodes);
            drop(placed);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Win for the bot, then loss, then draw on a full board.
fn terminal_score(board: &Board, sides: Sides) -> Option<i32> {
    if has_win(board, sides.bot) {
        Some(WIN_SCORE)
    } else if has_win(board, sides.opponent) {
        Some(LOSS_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// All coordinates in row-major order, matching [`Board::cells_in_play`].
fn coordinates(size: usize) -> impl Iterator<Item = Move> {
    (0..size * size).map(move |idx| Move::new(idx / size, idx % size))
}
