//! N×N board with bounds-checked move application.

use super::error::{MnkError, MnkErrorKind, MoveRejection};
use super::types::{Cell, Move, Symbol};
use tracing::{debug, instrument};

/// Square grid of cells with a fixed win length.
///
/// Cells are stored in row-major order. Once a cell is occupied it can only
/// return to [`Cell::Empty`] through [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `win_length` is zero, exceeds `size`,
    /// or `size * size` does not fit in `usize`.
    #[instrument]
    pub fn new(size: usize, win_length: usize) -> Result<Self, MnkError> {
        let invalid = || {
            MnkError::new(MnkErrorKind::InvalidConfiguration {
                size,
                win_length,
            })
        };
        if win_length == 0 || size < win_length {
            return Err(invalid());
        }
        let cell_count = size.checked_mul(size).ok_or_else(invalid)?;

        debug!(cell_count, "Creating empty board");
        Ok(Self {
            size,
            win_length,
            cells: vec![Cell::Empty; cell_count],
        })
    }

    /// Builds a board from row notation: rows separated by `/`, cells
    /// written as `X`, `O` or `.` (e.g. `XX./.O./...`).
    ///
    /// Whitespace is ignored. The row count sets the size.
    #[instrument]
    pub fn parse(notation: &str, win_length: usize) -> Result<Self, MnkError> {
        let rows: Vec<Vec<char>> = notation
            .split('/')
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();

        let size = rows.len();
        let mut board = Self::new(size, win_length)?;

        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(MnkError::new(MnkErrorKind::InvalidNotation(format!(
                    "row {} has {} cells, expected {}",
                    r + 1,
                    row.len(),
                    size
                ))));
            }
            for (c, &ch) in row.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let symbol = Symbol::from_char(ch).ok_or_else(|| {
                    MnkError::new(MnkErrorKind::InvalidNotation(format!(
                        "unexpected character {:?}",
                        ch
                    )))
                })?;
                board.cells[r * size + c] = Cell::Occupied(symbol);
            }
        }

        Ok(board)
    }

    /// Board side length (N).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run length required to win (K).
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Returns the cell at a 0-indexed coordinate, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Returns the cell targeted by a move.
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        self.get(mv.row, mv.col)
    }

    /// Checks if the cell at a move is on the board and empty.
    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.cell(mv) == Some(Cell::Empty)
    }

    /// Places `symbol` at a 0-indexed coordinate.
    ///
    /// Returns false and leaves the board untouched when the coordinate is
    /// outside `[0, size)` or the cell is occupied.
    pub fn apply_move(&mut self, row: isize, col: isize, symbol: Symbol) -> bool {
        match self.index_for(row, col) {
            Ok(idx) => {
                self.cells[idx] = Cell::Occupied(symbol);
                true
            }
            Err(_) => false,
        }
    }

    /// Like [`Board::apply_move`], but reports why a move was rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` for out-of-range or occupied cells.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: isize, col: isize, symbol: Symbol) -> Result<Move, MnkError> {
        let idx = self
            .index_for(row, col)
            .map_err(|reason| MnkError::new(MnkErrorKind::InvalidMove { row, col, reason }))?;
        self.cells[idx] = Cell::Occupied(symbol);
        debug!("Mark placed");
        Ok(Move::new(idx / self.size, idx % self.size))
    }

    /// Places `symbol` at a [`Move`].
    pub fn play(&mut self, mv: Move, symbol: Symbol) -> Result<Move, MnkError> {
        self.place(signed(mv.row), signed(mv.col), symbol)
    }

    /// Resets a cell to empty. Returns true if a mark was removed.
    pub fn clear(&mut self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let cell = &mut self.cells[row * self.size + col];
        let removed = *cell != Cell::Empty;
        *cell = Cell::Empty;
        removed
    }

    /// Places `symbol` for the lifetime of the returned guard.
    ///
    /// The cell is cleared when the guard drops, so exploratory placements
    /// cannot outlive the scope that made them. Returns `None` if the move
    /// is not legal.
    pub fn scoped(&mut self, mv: Move, symbol: Symbol) -> Option<Placement<'_>> {
        if !self.is_empty_at(mv) {
            return None;
        }
        self.cells[mv.row * self.size + mv.col] = Cell::Occupied(symbol);
        Some(Placement { board: self, mv })
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Empty cells in row-major order.
    ///
    /// This order is the search's move ordering.
    pub fn cells_in_play(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(idx, _)| Move::new(idx / self.size, idx % self.size))
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Empty).count()
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(symbol))
            .count()
    }

    /// Returns the notation accepted by [`Board::parse`].
    pub fn notation(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.as_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn index_for(&self, row: isize, col: isize) -> Result<usize, MoveRejection> {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return Err(MoveRejection::OutOfBounds);
        };
        match self.get(row, col) {
            None => Err(MoveRejection::OutOfBounds),
            Some(Cell::Occupied(_)) => Err(MoveRejection::Occupied),
            Some(Cell::Empty) => Ok(row * self.size + col),
        }
    }
}

/// Formats the board as a grid with 1-indexed headers.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.size.to_string().len();
        write!(f, "{:width$}", "", width = width)?;
        for col in 1..=self.size {
            write!(f, " {:>width$}", col, width = width)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{:>width$}", r + 1, width = width)?;
            for cell in row {
                write!(f, " {:>width$}", cell.as_char(), width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// An exploratory mark that is removed on drop.
///
/// Derefs to the board so the search can recurse through it.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Placement<'_> {
    /// The move this guard holds.
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl std::ops::Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl std::ops::DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv.row, self.mv.col);
    }
}

fn signed(v: usize) -> isize {
    isize::try_from(v).unwrap_or(isize::MAX)
}
