//! Core domain types for m,n,k games.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// Mark X.
    #[display("X")]
    X,
    /// Mark O.
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Parses a mark from a single character (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Symbol::X),
            'O' => Some(Symbol::O),
            _ => None,
        }
    }
}

impl std::str::FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::from_char(c).ok_or_else(|| format!("Unknown symbol: {}", s)),
            _ => Err(format!("Unknown symbol: {}", s)),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed.
    Empty,
    /// Cell holds a player's mark.
    Occupied(Symbol),
}

impl Cell {
    /// Character used in board notation and rendering.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Symbol::X) => 'X',
            Cell::Occupied(Symbol::O) => 'O',
        }
    }
}

/// A 0-indexed board coordinate.
///
/// `Display` prints the 1-indexed form shown to humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0-indexed.
    pub row: usize,
    /// Column, 0-indexed.
    pub col: usize,
}

impl Move {
    /// Creates a move from 0-indexed coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts 1-indexed coordinates from a human-facing surface.
    ///
    /// Returns `None` for a zero coordinate; bounds against a particular
    /// board are checked when the move is applied.
    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        Some(Self {
            row: row.checked_sub(1)?,
            col: col.checked_sub(1)?,
        })
    }

    /// Returns the 1-indexed `(row, col)` pair.
    pub fn one_based(self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (row, col) = self.one_based();
        write!(f, "({}, {})", row, col)
    }
}

/// State of a game, derived from the board each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves remain and nobody has won.
    InProgress,
    /// A player completed a run.
    Win(Symbol),
    /// Board is full with no run.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}
