use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::sliding_moves::slider_reaches;

/// Bishop, rook and queen movement along clear diagonals or straight lines.
#[inline]
pub fn is_valid_sliding_move(
    game_state: &GameState,
    piece: Piece,
    from: Square,
    to: Square,
) -> bool {
    slider_reaches(&game_state.board, piece.kind, from, to)
}
