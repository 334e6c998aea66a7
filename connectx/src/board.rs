mod config;
mod dense;
mod error;
mod sparse;

pub use config::*;
pub use dense::*;
pub use error::*;
pub use sparse::*;

use serde::{Deserialize, Serialize};

use crate::Token;

/// A cell on the board. Row 0 is the bottom row, column 0 the leftmost column.
///
/// The type itself does not know about the size of any board, see
/// [`Board::contains()`] for checking bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The position shifted by the given amounts, or `None` if that would
    /// make a coordinate negative.
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            column: self.column.checked_add_signed(d_column)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// A board onto which tokens are dropped column by column.
///
/// Tokens fall to the lowest empty cell of a column, so the occupied cells of
/// every column always form a contiguous block starting at row 0.
///
/// There are two implementations with identical behavior:
/// [`DenseBoard`] stores every cell, [`SparseBoard`] only stores the positions
/// of placed tokens.
pub trait Board {
    fn config(&self) -> BoardConfig;

    /// Places the token in the lowest empty cell of the column and returns that cell.
    fn place(&mut self, token: Token, column: usize) -> Result<Position, BoardError>;

    /// The token at the given position, or `None` if the cell is empty.
    ///
    /// Positions outside of the board are empty.
    fn value_at(&self, position: Position) -> Option<Token>;

    fn rows(&self) -> usize {
        self.config().rows()
    }

    fn columns(&self) -> usize {
        self.config().columns()
    }

    fn win_length(&self) -> usize {
        self.config().win_length()
    }

    fn contains(&self, position: Position) -> bool {
        position.row < self.rows() && position.column < self.columns()
    }

    fn has_token(&self, position: Position, token: Token) -> bool {
        self.value_at(position) == Some(token)
    }

    /// Can the column accept another token?
    ///
    /// This is `false` for columns that don't exist.
    fn is_column_open(&self, column: usize) -> bool {
        column < self.columns() && self.value_at(Position::new(self.rows() - 1, column)).is_none()
    }

    /// The topmost occupied cell of the column, i.e. the most recently placed token in it.
    fn top_of_column(&self, column: usize) -> Option<Position> {
        if column >= self.columns() {
            return None;
        }
        (0..self.rows())
            .rev()
            .map(|row| Position::new(row, column))
            .find(|&position| self.value_at(position).is_some())
    }

    /// Is every cell occupied?
    ///
    /// Because columns are filled from the bottom, it's enough to check the top row.
    fn is_full(&self) -> bool {
        (0..self.columns()).all(|column| !self.is_column_open(column))
    }
}

impl<B: Board + ?Sized> Board for Box<B> {
    fn config(&self) -> BoardConfig {
        (**self).config()
    }

    fn place(&mut self, token: Token, column: usize) -> Result<Position, BoardError> {
        (**self).place(token, column)
    }

    fn value_at(&self, position: Position) -> Option<Token> {
        (**self).value_at(position)
    }

    fn has_token(&self, position: Position, token: Token) -> bool {
        (**self).has_token(position, token)
    }

    fn top_of_column(&self, column: usize) -> Option<Position> {
        (**self).top_of_column(column)
    }
}

// Shared validation for implementations of Board::place()
pub(crate) fn check_column<B: Board + ?Sized>(board: &B, column: usize) -> Result<(), BoardError> {
    if column >= board.columns() {
        Err(BoardError::InvalidColumn {
            column,
            columns: board.columns(),
        })
    } else if !board.is_column_open(column) {
        Err(BoardError::ColumnFull { column })
    } else {
        Ok(())
    }
}

/// Which [`Board`] implementation to use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// A [`DenseBoard`], fast for small boards.
    #[default]
    Dense,
    /// A [`SparseBoard`], memory-efficient for big, mostly empty boards.
    Sparse,
}

impl StorageKind {
    pub fn new_board(self, config: BoardConfig) -> Box<dyn Board> {
        match self {
            StorageKind::Dense => Box::new(DenseBoard::new(config)),
            StorageKind::Sparse => Box::new(SparseBoard::new(config)),
        }
    }
}
