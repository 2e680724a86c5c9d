//! Generalized m,n,k tic-tac-toe: board, rules and search.
//!
//! Nothing in here performs I/O; the `play` module drives it.

mod board;
mod error;
pub mod rules;
mod search;
mod types;

pub use board::{Board, Placement};
pub use error::{MnkError, MnkErrorKind, MoveRejection};
pub use search::{DRAW_SCORE, LOSS_SCORE, SearchEngine, SearchResult, WIN_SCORE};
pub use types::{Cell, GameOutcome, Move, Symbol};
