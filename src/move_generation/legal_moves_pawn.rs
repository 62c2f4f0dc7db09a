use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;

/// Pawn movement: single push onto an empty square, double push from the
/// start row through an empty square, or a forward diagonal capture.
pub fn is_valid_pawn_move(game_state: &GameState, pawn: Piece, from: Square, to: Square) -> bool {
    let board = &game_state.board;
    let direction = pawn.color.pawn_direction();
    let d_row = to.row as i8 - from.row as i8;
    let d_col = to.col as i8 - from.col as i8;

    if d_col == 0 {
        if d_row == direction {
            return board.is_empty(to);
        }
        if d_row == 2 * direction && from.row == pawn.color.pawn_start_row() {
            let Some(middle) = from.offset(direction, 0) else {
                return false;
            };
            return board.is_empty(middle) && board.is_empty(to);
        }
        return false;
    }

    d_row == direction && d_col.abs() == 1 && enemy_piece_on(game_state, to, pawn.color).is_some()
}
