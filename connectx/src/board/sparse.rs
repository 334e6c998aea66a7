use super::{check_column, Board, BoardConfig, BoardError, Position};
use crate::Token;

/// A [`Board`] that only stores the positions of placed tokens.
///
/// The memory used is proportional to the number of tokens on the board, which
/// makes it suitable for huge boards. Looking up a cell needs to go through all
/// positions, though.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseBoard {
    config: BoardConfig,
    /// There is exactly one entry in this list for every token that has been placed
    /// at least once, in the order of their first placement.
    ///
    /// The positions of each token are in the order they were placed.
    tokens: Vec<(Token, Vec<Position>)>,
}

impl SparseBoard {
    /// Creates an empty board.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            tokens: Vec::new(),
        }
    }

    /// The positions occupied by this token, in the order they were placed.
    pub fn positions_of(&self, token: Token) -> &[Position] {
        self.tokens
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, positions)| positions.as_slice())
            .unwrap_or_default()
    }

    /// The number of tokens on the board.
    pub fn num_placed(&self) -> usize {
        self.tokens.iter().map(|(_, positions)| positions.len()).sum()
    }
}

impl Board for SparseBoard {
    fn config(&self) -> BoardConfig {
        self.config
    }

    fn place(&mut self, token: Token, column: usize) -> Result<Position, BoardError> {
        check_column(&*self, column)?;
        let position = (0..self.config.rows())
            .map(|row| Position::new(row, column))
            .find(|&position| self.value_at(position).is_none())
            .ok_or(BoardError::ColumnFull { column })?;

        // Add the position to the token's list, or add a new list for a token placed for the first time
        match self.tokens.iter_mut().find(|(t, _)| *t == token) {
            Some((_, positions)) => positions.push(position),
            None => self.tokens.push((token, vec![position])),
        }
        Ok(position)
    }

    fn value_at(&self, position: Position) -> Option<Token> {
        self.tokens
            .iter()
            .find(|(_, positions)| positions.contains(&position))
            .map(|&(token, _)| token)
    }

    fn has_token(&self, position: Position, token: Token) -> bool {
        // A token that was never placed needs no scanning, positions_of() is empty then
        self.positions_of(token).contains(&position)
    }
}

impl std::fmt::Display for SparseBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::visualize(self))
    }
}
