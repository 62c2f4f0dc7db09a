use crate::game_state::chess_types::Square;
use crate::moves::knight_moves::is_knight_step;

/// Knights jump the eight fixed offsets regardless of intervening pieces.
#[inline]
pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    is_knight_step(from, to)
}

#[cfg(test)]
mod tests {
    use super::is_valid_knight_move;
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_jumps_over_the_pawn_wall() {
        let mut game = GameState::new_game();
        assert!(is_valid_knight_move(Square::new(7, 1), Square::new(5, 2)));
        assert!(!is_valid_knight_move(Square::new(7, 1), Square::new(5, 1)));
        assert!(game.is_valid_move(Square::new(7, 1), Square::new(5, 0)));
    }
}
