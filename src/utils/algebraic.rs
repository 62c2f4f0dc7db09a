//! Coordinate names for logs and terminal output.
//!
//! Row 7 is rank 1 and column 0 is file `a`, so the light king starts on
//! `e1`. Only the square-to-name direction exists.

use crate::game_state::chess_types::Square;

/// Name of `square` (for example: "e4"); off-board squares render as `??`.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    if !square.is_on_board() {
        return "??".to_owned();
    }

    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);

    format!("{file_char}{rank_char}")
}
