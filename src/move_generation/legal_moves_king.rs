use crate::game_state::chess_rules::{castle_side_for, king_home, rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::is_king_step;

/// One step in any direction, or a castling move.
pub fn is_valid_king_move(game_state: &GameState, king: Piece, from: Square, to: Square) -> bool {
    if is_king_step(from, to) {
        return true;
    }
    match castle_side_for(king.color, from, to) {
        Some(side) => can_castle(game_state, king.color, side),
        None => false,
    }
}

/// Castling preconditions: the right is still held, the rook is home, every
/// square between king and rook is empty, and neither the king's square, the
/// square it crosses nor its destination is attacked.
pub fn can_castle(game_state: &GameState, color: Color, side: CastleSide) -> bool {
    if !game_state.castling_rights.get(color, side) {
        return false;
    }

    let board = &game_state.board;
    let king_from = king_home(color);
    let rook_from = rook_home(color, side);

    if board.piece_at(king_from) != Some(Piece::new(PieceKind::King, color)) {
        return false;
    }
    if board.piece_at(rook_from) != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }

    let (low, high) = if rook_from.col < king_from.col {
        (rook_from.col + 1, king_from.col)
    } else {
        (king_from.col + 1, rook_from.col)
    };
    if (low..high).any(|col| !board.is_empty(Square::new(king_from.row, col))) {
        return false;
    }

    let step: i8 = match side {
        CastleSide::KingSide => 1,
        CastleSide::QueenSide => -1,
    };
    let enemy = color.opposite();
    [0i8, step, 2 * step].into_iter().all(|d_col| {
        king_from
            .offset(0, d_col)
            .is_some_and(|square| !is_square_attacked(game_state, square, enemy))
    })
}
