use crate::game_state::chess_types::{Color, Square};

/// A pawn of `color` on `from` attacks `target`: one row forward and one
/// column to either side. Pawns never attack along their own file.
#[inline]
pub fn pawn_attacks_square(color: Color, from: Square, target: Square) -> bool {
    let d_row = target.row as i8 - from.row as i8;
    let d_col = (target.col as i8 - from.col as i8).abs();
    d_row == color.pawn_direction() && d_col == 1
}

/// Rows advanced from the colour's pawn start row.
#[inline]
pub fn rows_from_start(color: Color, square: Square) -> i32 {
    let rows_moved = square.row as i32 - color.pawn_start_row() as i32;
    (rows_moved * color.pawn_direction() as i32).max(0)
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks_square, rows_from_start};
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn light_pawn_attacks_toward_row_zero() {
        let e2 = Square::new(6, 4);
        assert!(pawn_attacks_square(Color::Light, e2, Square::new(5, 3)));
        assert!(pawn_attacks_square(Color::Light, e2, Square::new(5, 5)));
        assert!(!pawn_attacks_square(Color::Light, e2, Square::new(5, 4)));
        assert!(!pawn_attacks_square(Color::Light, e2, Square::new(7, 3)));
    }

    #[test]
    fn dark_pawn_attacks_toward_row_seven() {
        let a7 = Square::new(1, 0);
        assert!(pawn_attacks_square(Color::Dark, a7, Square::new(2, 1)));
        assert!(!pawn_attacks_square(Color::Dark, a7, Square::new(0, 1)));
    }

    #[test]
    fn advancement_counts_rows_from_start() {
        assert_eq!(rows_from_start(Color::Light, Square::new(6, 0)), 0);
        assert_eq!(rows_from_start(Color::Light, Square::new(3, 0)), 3);
        assert_eq!(rows_from_start(Color::Dark, Square::new(5, 0)), 4);
    }

    #[test]
    fn pawn_behind_its_start_row_has_not_advanced() {
        assert_eq!(rows_from_start(Color::Light, Square::new(7, 2)), 0);
        assert_eq!(rows_from_start(Color::Dark, Square::new(0, 2)), 0);
        assert_eq!(rows_from_start(Color::Dark, Square::new(7, 2)), 6);
    }
}
