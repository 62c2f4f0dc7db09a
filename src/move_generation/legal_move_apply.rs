//! The two move-application paths.
//!
//! `make_move` validates first and is the public way to advance a game.
//! `apply_move_unchecked` / `undo_move_unchecked` form the fast path used by
//! search, mobility scoring and the self-check simulation. Both paths share
//! `place_moved_piece`, `relocate_castling_rook` and `update_castling_rights`
//! so castling, promotion and rights bookkeeping cannot drift apart.

use log::debug;

use crate::game_state::chess_rules::{
    castle_rook_target_col, castle_side_for, rook_home, rook_home_owner,
};
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};
use crate::move_generation::legal_move_validator::is_valid_move;

/// Validated path. Returns `false`, leaving the state untouched, when the
/// move is illegal.
pub fn make_move(game_state: &mut GameState, from: Square, to: Square) -> bool {
    if !is_valid_move(game_state, from, to) {
        debug!("rejected move {from}{to} for {}", game_state.side_to_move);
        return false;
    }
    apply_move_unchecked(game_state, from, to).is_some()
}

/// Fast path. Plays `from -> to` without a legality check and returns the
/// pre-image needed to revert it. `None` (and no mutation) when `from` is
/// off the board or empty.
pub fn apply_move_unchecked(
    game_state: &mut GameState,
    from: Square,
    to: Square,
) -> Option<UndoState> {
    if !from.is_on_board() || !to.is_on_board() {
        return None;
    }
    let moved_piece = game_state.board.piece_at(from)?;

    let undo_base = UndoState {
        from,
        to,
        moved_piece,
        captured_piece: game_state.board.piece_at(to),
        rook_relocation: None,
        prev_castling_rights: game_state.castling_rights,
        prev_side_to_move: game_state.side_to_move,
        prev_move_count: game_state.move_count,
    };

    place_moved_piece(&mut game_state.board, moved_piece, from, to);
    let rook_relocation = relocate_castling_rook(&mut game_state.board, moved_piece, from, to);
    update_castling_rights(&mut game_state.castling_rights, moved_piece, from, to);

    game_state.side_to_move = moved_piece.color.opposite();
    game_state.move_count = game_state.move_count.saturating_add(1);

    Some(UndoState {
        rook_relocation,
        ..undo_base
    })
}

/// Revert a move applied by `apply_move_unchecked`. Must be called in stack
/// order with respect to other fast-path applications.
pub fn undo_move_unchecked(game_state: &mut GameState, undo: &UndoState) {
    if let Some((rook_from, rook_to)) = undo.rook_relocation {
        let rook = game_state.board.take(rook_to);
        game_state.board.set(rook_from, rook);
    }

    game_state.board.set(undo.from, Some(undo.moved_piece));
    game_state.board.set(undo.to, undo.captured_piece);

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.side_to_move = undo.prev_side_to_move;
    game_state.move_count = undo.prev_move_count;
}

/// Move the piece, promoting a pawn that reaches its last row to a queen of
/// its own colour.
fn place_moved_piece(board: &mut Board, moved_piece: Piece, from: Square, to: Square) {
    let promotes =
        moved_piece.kind == PieceKind::Pawn && to.row == moved_piece.color.promotion_row();
    let placed = if promotes {
        Piece::new(PieceKind::Queen, moved_piece.color)
    } else {
        moved_piece
    };
    board.set(from, None);
    board.set(to, Some(placed));
}

/// Bring the rook across when a king move is a castling move.
fn relocate_castling_rook(
    board: &mut Board,
    moved_piece: Piece,
    from: Square,
    to: Square,
) -> Option<(Square, Square)> {
    if moved_piece.kind != PieceKind::King {
        return None;
    }
    let side = castle_side_for(moved_piece.color, from, to)?;
    let rook_from = rook_home(moved_piece.color, side);
    let rook = Piece::new(PieceKind::Rook, moved_piece.color);
    if board.piece_at(rook_from) != Some(rook) {
        return None;
    }

    let rook_to = Square::new(rook_from.row, castle_rook_target_col(side));
    board.set(rook_from, None);
    board.set(rook_to, Some(rook));
    Some((rook_from, rook_to))
}

/// A king move clears both of its colour's rights; a move from or onto a
/// rook home square clears the right tied to that corner.
fn update_castling_rights(
    rights: &mut CastlingRights,
    moved_piece: Piece,
    from: Square,
    to: Square,
) {
    if moved_piece.kind == PieceKind::King {
        rights.revoke_all(moved_piece.color);
    }

    for square in [from, to] {
        if let Some((color, side)) = rook_home_owner(square) {
            rights.revoke(color, side);
        }
    }
}
