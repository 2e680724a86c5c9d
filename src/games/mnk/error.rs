//! Error types for the m,n,k core.

use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// A coordinate lies outside `[0, size)`.
    #[display("out of bounds")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[display("occupied")]
    Occupied,
}

/// Specific error conditions of the core.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MnkErrorKind {
    /// Move outside the board or onto an occupied cell. Recoverable.
    #[display("Invalid move at ({}, {}): {}", row, col, reason)]
    InvalidMove {
        /// Requested row (as supplied, 0-indexed).
        row: isize,
        /// Requested column (as supplied, 0-indexed).
        col: isize,
        /// Reason for rejection.
        reason: MoveRejection,
    },

    /// Board dimensions that cannot host a game.
    #[display("Invalid configuration: size {} with win length {}", size, win_length)]
    InvalidConfiguration {
        /// Requested board size.
        size: usize,
        /// Requested win length.
        win_length: usize,
    },

    /// Board notation that cannot be read.
    #[display("Invalid board notation: {}", _0)]
    InvalidNotation(String),

    /// A caller broke a contract (e.g. searching a full board).
    #[display("Invalid state: {}", _0)]
    InvalidState(String),
}

/// Core error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct MnkError {
    /// What went wrong.
    pub kind: MnkErrorKind,
    /// Line number where the error was created.
    pub line: u32,
    /// Source file where the error was created.
    pub file: &'static str,
}

impl MnkError {
    /// Creates a new error at the caller's location.
    #[track_caller]
    #[instrument(skip(kind), fields(kind = %kind))]
    pub fn new(kind: MnkErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &MnkErrorKind {
        &self.kind
    }

    /// True for the recoverable move rejection.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self.kind, MnkErrorKind::InvalidMove { .. })
    }
}

impl From<MnkErrorKind> for MnkError {
    #[track_caller]
    fn from(kind: MnkErrorKind) -> Self {
        Self::new(kind)
    }
}
