use serde::{Deserialize, Serialize};

use super::ConfigError;

pub const MIN_ROWS: usize = 3;
pub const MAX_ROWS: usize = 100;
pub const MIN_COLUMNS: usize = 3;
pub const MAX_COLUMNS: usize = 100;
pub const MIN_WIN_LENGTH: usize = 3;
pub const MAX_WIN_LENGTH: usize = 25;

/// The fixed dimensions of a board and the number of tokens in a row needed to win.
///
/// A value of this type is always within the allowed ranges, so a board can
/// never be built from an invalid configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    rows: usize,
    columns: usize,
    win_length: usize,
}

// Unvalidated mirror of BoardConfig for deserialization
#[derive(Deserialize)]
struct RawBoardConfig {
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl BoardConfig {
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Result<Self, ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) {
            return Err(ConfigError::RowsOutOfRange { rows });
        }
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns) {
            return Err(ConfigError::ColumnsOutOfRange { columns });
        }
        if !(MIN_WIN_LENGTH..=MAX_WIN_LENGTH).contains(&win_length) {
            return Err(ConfigError::WinLengthOutOfRange { win_length });
        }
        Ok(Self {
            rows,
            columns,
            win_length,
        })
    }

    /// Skips validation, so tests can exercise win lengths the game never allows.
    #[cfg(test)]
    pub(crate) fn unchecked(rows: usize, columns: usize, win_length: usize) -> Self {
        Self {
            rows,
            columns,
            win_length,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

impl Default for BoardConfig {
    /// The classic 6 x 7 board with 4 in a row to win.
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 7,
            win_length: 4,
        }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        BoardConfig::new(raw.rows, raw.columns, raw.win_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(BoardConfig::new(3, 3, 3).is_ok());
        assert!(BoardConfig::new(100, 100, 25).is_ok());
        assert_eq!(
            BoardConfig::new(2, 7, 4),
            Err(ConfigError::RowsOutOfRange { rows: 2 })
        );
        assert_eq!(
            BoardConfig::new(6, 101, 4),
            Err(ConfigError::ColumnsOutOfRange { columns: 101 })
        );
        assert_eq!(
            BoardConfig::new(6, 7, 26),
            Err(ConfigError::WinLengthOutOfRange { win_length: 26 })
        );
    }

    #[test]
    fn win_length_may_exceed_dimensions() {
        let config = BoardConfig::new(3, 4, 25).unwrap();
        assert_eq!(config.win_length(), 25);
    }

    #[test]
    fn deserialization_validates() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"rows": 8, "columns": 9, "win_length": 5}"#).unwrap();
        assert_eq!(config, BoardConfig::new(8, 9, 5).unwrap());

        let err = serde_json::from_str::<BoardConfig>(r#"{"rows": 1, "columns": 9, "win_length": 5}"#)
            .unwrap_err();
        assert!(err.to_string().contains("between 3 and 100 rows"));
    }
}
