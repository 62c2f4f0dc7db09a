//! Full legality test for a single `(from, to)` pair.
//!
//! A move is legal when the shared preconditions hold, the piece's own
//! movement rule accepts it, and it does not leave the mover's king attacked.
//! The self-check test is evaluated for every piece kind, castling included.

use log::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::would_leave_in_check;
use crate::move_generation::legal_move_shared::moving_piece_if_admissible;
use crate::move_generation::legal_moves_king::is_valid_king_move;
use crate::move_generation::legal_moves_knight::is_valid_knight_move;
use crate::move_generation::legal_moves_pawn::is_valid_pawn_move;
use crate::move_generation::legal_moves_sliding::is_valid_sliding_move;

/// Movement rule of `piece` alone, ignoring king safety.
pub fn follows_piece_rules(game_state: &GameState, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(game_state, piece, from, to),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::King => is_valid_king_move(game_state, piece, from, to),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            is_valid_sliding_move(game_state, piece, from, to)
        }
    }
}

pub fn is_valid_move(game_state: &mut GameState, from: Square, to: Square) -> bool {
    let Some(piece) = moving_piece_if_admissible(game_state, from, to) else {
        return false;
    };
    if !follows_piece_rules(game_state, piece, from, to) {
        return false;
    }
    if would_leave_in_check(game_state, from, to) {
        trace!("{from}{to} rejected: leaves {} king attacked", piece.color);
        return false;
    }
    true
}
