/// The error type for placing a token, see [`Board::place()`](crate::Board::place).
///
/// If one of these is returned, the board has not been modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    InvalidColumn { column: usize, columns: usize },
    ColumnFull { column: usize },
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidColumn { column, columns } => write!(
                f,
                "Column {} does not exist, columns are numbered 0 to {}",
                column,
                columns - 1
            ),
            BoardError::ColumnFull { column } => write!(f, "Column {} is full", column),
        }
    }
}

/// The error type for an out-of-range board or game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    RowsOutOfRange { rows: usize },
    ColumnsOutOfRange { columns: usize },
    WinLengthOutOfRange { win_length: usize },
    PlayersOutOfRange { players: usize },
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use super::{MAX_COLUMNS, MAX_ROWS, MAX_WIN_LENGTH, MIN_COLUMNS, MIN_ROWS, MIN_WIN_LENGTH};
        use crate::{MAX_PLAYERS, MIN_PLAYERS};

        match self {
            ConfigError::RowsOutOfRange { rows } =>
                write!(f, "A board needs between {} and {} rows, not {}", MIN_ROWS, MAX_ROWS, rows),
            ConfigError::ColumnsOutOfRange { columns } =>
                write!(f, "A board needs between {} and {} columns, not {}", MIN_COLUMNS, MAX_COLUMNS, columns),
            ConfigError::WinLengthOutOfRange { win_length } =>
                write!(f, "The number of tokens in a row to win must be between {} and {}, not {}", MIN_WIN_LENGTH, MAX_WIN_LENGTH, win_length),
            ConfigError::PlayersOutOfRange { players } =>
                write!(f, "A game needs between {} and {} players, not {}", MIN_PLAYERS, MAX_PLAYERS, players),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            BoardError::InvalidColumn {
                column: 9,
                columns: 7
            }
            .to_string(),
            "Column 9 does not exist, columns are numbered 0 to 6"
        );
        assert_eq!(
            ConfigError::WinLengthOutOfRange { win_length: 2 }.to_string(),
            "The number of tokens in a row to win must be between 3 and 25, not 2"
        );
    }
}
