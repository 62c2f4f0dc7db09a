use crate::game_state::{chess_types::*, game_state::GameState};

/// Checks shared by every piece kind: both squares on the board, the source
/// holds a piece of the side to move, and the destination is not friendly.
/// Returns the moving piece when all hold.
#[inline]
pub fn moving_piece_if_admissible(
    game_state: &GameState,
    from: Square,
    to: Square,
) -> Option<Piece> {
    if !from.is_on_board() || !to.is_on_board() || from == to {
        return None;
    }

    let piece = game_state.board.piece_at(from)?;
    if piece.color != game_state.side_to_move {
        return None;
    }

    match game_state.board.piece_at(to) {
        Some(target) if target.color == piece.color => None,
        _ => Some(piece),
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square, mover: Color) -> Option<Piece> {
    game_state
        .board
        .piece_at(square)
        .filter(|piece| piece.color != mover)
}
