use super::{check_column, Board, BoardConfig, BoardError, Position};
use crate::Token;

/// A [`Board`] that stores the content of every cell.
///
/// Looking up a cell is O(1), but the memory used is proportional to the
/// size of the board no matter how many tokens were placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseBoard {
    config: BoardConfig,
    // It's in row-major order, i.e. indexed by [row * columns + column].
    // Row 0 is the bottom row.
    arr: Vec<Option<Token>>,
}

impl DenseBoard {
    /// Creates an empty board.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            arr: vec![None; config.rows() * config.columns()],
        }
    }

    /// All cells, bottom row first.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Token>)> + '_ {
        let columns = self.config.columns();
        self.arr
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Position::new(idx / columns, idx % columns), cell))
    }

    // Check that the position is on the board and convert it into a "flat" array index
    fn arr_idx(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(self.config.columns() * position.row + position.column)
        } else {
            None
        }
    }
}

impl Board for DenseBoard {
    fn config(&self) -> BoardConfig {
        self.config
    }

    fn place(&mut self, token: Token, column: usize) -> Result<Position, BoardError> {
        check_column(&*self, column)?;
        // Find the lowest empty row in this column
        for row in 0..self.config.rows() {
            let idx = self.config.columns() * row + column;
            if self.arr[idx].is_none() {
                self.arr[idx] = Some(token);
                return Ok(Position::new(row, column));
            }
        }
        // check_column() made sure the top cell is empty
        Err(BoardError::ColumnFull { column })
    }

    fn value_at(&self, position: Position) -> Option<Token> {
        self.arr_idx(position).and_then(|idx| self.arr[idx])
    }
}

impl std::fmt::Display for DenseBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::visualize(self))
    }
}
