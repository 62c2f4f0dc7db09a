use crate::game_state::chess_types::Square;

/// `to` is one L-shaped jump from `from`. Intervening pieces are irrelevant.
#[inline]
pub fn is_knight_step(from: Square, to: Square) -> bool {
    let d_row = (to.row as i8 - from.row as i8).abs();
    let d_col = (to.col as i8 - from.col as i8).abs();
    (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1)
}
