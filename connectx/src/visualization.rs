use crate::{Board, Position};

/// Renders the board as text, with the column numbers on top and the top row first.
///
/// ```text
/// | 0| 1| 2|
/// |  |  |  |
/// |O |  |  |
/// |X |X |  |
/// ```
pub fn visualize<B: Board + ?Sized>(board: &B) -> String {
    let mut result = String::with_capacity((board.rows() + 1) * (3 * board.columns() + 2));
    // Draw the column numbers
    for column in 0..board.columns() {
        result += &format!("|{:>2}", column);
    }
    result += "|\n";

    for row in (0..board.rows()).rev() {
        result.push('|');
        for column in 0..board.columns() {
            let glyph = board
                .value_at(Position::new(row, column))
                .map_or(' ', |token| token.glyph());
            result.push(glyph);
            result += " |";
        }
        result.push('\n');
    }
    result
}
