use crate::game_state::chess_types::Square;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// `to` is one of the eight squares adjacent to `from`.
#[inline]
pub fn is_king_step(from: Square, to: Square) -> bool {
    let d_row = (to.row as i8 - from.row as i8).abs();
    let d_col = (to.col as i8 - from.col as i8).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

pub fn king_neighbours(from: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}
