use serde::{Deserialize, Serialize};

use crate::{Board, BoardError, Position, Token};

/// A line through the anchor along which a win can happen.
///
/// Directions are given in (row, column) steps, with rows counted upwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    /// Only the cells below the anchor are counted.
    Vertical,
    /// From the top left to the bottom right.
    DescendingDiagonal,
    /// From the bottom left to the top right.
    AscendingDiagonal,
}

impl Direction {
    /// All directions, in the order they are checked.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DescendingDiagonal,
        Direction::AscendingDiagonal,
    ];

    // The rays that are followed from the anchor and share one count.
    fn rays(self) -> &'static [(isize, isize)] {
        match self {
            Direction::Horizontal => &[(0, 1), (0, -1)],
            // The anchor is the topmost token of its column, so there's nothing above it
            Direction::Vertical => &[(-1, 0)],
            Direction::DescendingDiagonal => &[(1, -1), (-1, 1)],
            Direction::AscendingDiagonal => &[(1, 1), (-1, -1)],
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DescendingDiagonal => "descending diagonal",
            Direction::AscendingDiagonal => "ascending diagonal",
        };
        write!(f, "{}", name)
    }
}

/// Did the game end in a tie, i.e. is there no room left on the board?
pub fn check_tie<B: Board + ?Sized>(board: &B) -> bool {
    board.is_full()
}

/// Did the last token placed in `column` complete a line of [`Board::win_length()`] tokens?
///
/// This must be called right after placing a token in `column`, before any
/// other token is placed: the topmost token of the column is taken to be the
/// last one played. For an empty column, the answer is `false`.
pub fn check_win<B: Board + ?Sized>(board: &B, column: usize) -> Result<bool, BoardError> {
    Ok(winning_direction(board, column)?.is_some())
}

/// Like [`check_win()`], but returns the direction of the line that was completed.
///
/// If the token completed lines in several directions, the first one in
/// [`Direction::ALL`] is returned.
pub fn winning_direction<B: Board + ?Sized>(
    board: &B,
    column: usize,
) -> Result<Option<Direction>, BoardError> {
    if column >= board.columns() {
        return Err(BoardError::InvalidColumn {
            column,
            columns: board.columns(),
        });
    }
    let Some(anchor) = board.top_of_column(column) else {
        return Ok(None);
    };
    let Some(token) = board.value_at(anchor) else {
        return Ok(None);
    };
    Ok(Direction::ALL
        .into_iter()
        .find(|&direction| line_reaches_win_length(board, anchor, token, direction)))
}

// Counts the tokens in a line through the anchor, stopping as soon as there are enough.
//
// Each ray is followed until it leaves the board or hits a cell without the token.
fn line_reaches_win_length<B: Board + ?Sized>(
    board: &B,
    anchor: Position,
    token: Token,
    direction: Direction,
) -> bool {
    let win_length = board.win_length();
    let mut count = 1;
    if count >= win_length {
        return true;
    }
    for &(d_row, d_column) in direction.rays() {
        let mut position = anchor;
        while let Some(next) = position.offset(d_row, d_column) {
            if !board.contains(next) || !board.has_token(next, token) {
                break;
            }
            count += 1;
            if count >= win_length {
                return true;
            }
            position = next;
        }
    }
    false
}
