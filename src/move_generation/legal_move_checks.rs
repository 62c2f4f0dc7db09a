//! Attack and check detection.
//!
//! Everything here scans the mailbox directly: for each piece of the attacking
//! colour the piece-specific geometry is tested against the target square,
//! returning on the first hit.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::is_king_step;
use crate::moves::knight_moves::is_knight_step;
use crate::moves::pawn_moves::pawn_attacks_square;
use crate::moves::sliding_moves::slider_reaches;

/// Square of the king of `color`, or `None` if that king is absent.
#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state
        .board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// `color` is in check. A missing king is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let board = &game_state.board;
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| from != square && piece_attacks(board, piece, from, square))
}

/// Piece-specific attack geometry, including path clearance for sliders.
pub fn piece_attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks_square(piece.color, from, target),
        PieceKind::Knight => is_knight_step(from, target),
        PieceKind::King => is_king_step(from, target),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            slider_reaches(board, piece.kind, from, target)
        }
    }
}

/// Play `from -> to` on the board (castling rook and promotion included),
/// test whether the mover's king is attacked, then revert.
///
/// The revert is owned by the scoped-move guard, so it runs however this
/// function exits. An empty `from` square leaves nothing to expose.
pub fn would_leave_in_check(game_state: &mut GameState, from: Square, to: Square) -> bool {
    let Some(mover) = game_state.board.piece_at(from) else {
        return false;
    };
    match game_state.scoped_move(from, to) {
        Some(after) => is_king_in_check(&after, mover.color),
        None => false,
    }
}
