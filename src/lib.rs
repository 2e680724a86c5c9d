//! Strictly MNK library - generalized m,n,k tic-tac-toe
//!
//! An N×N board, K marks in a row to win, and an automated opponent that
//! searches the full game tree with alpha-beta pruning.
//!
//! # Architecture
//!
//! - **Board**: grid state with bounds-checked move application
//! - **Rules**: win detection for any N and K, outcome derivation
//! - **Search**: depth-complete minimax choosing the bot's move
//! - **Play**: terminal turn loop, seats and prompt parsing
//!
//! # Example
//!
//! ```
//! use strictly_mnk::{Board, Move, SearchEngine, Symbol, has_win};
//!
//! # fn example() -> Result<(), strictly_mnk::MnkError> {
//! let mut board = Board::parse("XX./OO./...", 3)?;
//! let mv = SearchEngine::new().choose_move(&mut board, Symbol::X, Symbol::O)?;
//! assert_eq!(mv, Move::new(0, 2));
//!
//! board.play(mv, Symbol::X)?;
//! assert!(has_win(&board, Symbol::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod play;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlayMode};

// Crate-level exports - Game types
pub use games::mnk::{
    Board, Cell, DRAW_SCORE, GameOutcome, LOSS_SCORE, MnkError, MnkErrorKind, Move, MoveRejection,
    Placement, SearchEngine, SearchResult, Symbol, WIN_SCORE,
};

// Crate-level exports - Rules
pub use games::mnk::rules::{has_win, is_draw, outcome, winner, winning_line};

// Crate-level exports - Terminal play
pub use play::{InputError, Orchestrator, Seat, Seats, parse_coordinates};
