//! Line geometry shared by bishops, rooks and queens.

use crate::game_state::chess_types::{Board, PieceKind, Square};

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let d_row = (to.row as i8 - from.row as i8).abs();
    let d_col = (to.col as i8 - from.col as i8).abs();
    d_row == d_col && d_row != 0
}

#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    (from.row == to.row) != (from.col == to.col)
}

/// Every square strictly between `from` and `to` is empty.
///
/// Callers guarantee the two squares share a row, column or diagonal.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row as i8 - from.row as i8).signum();
    let step_col = (to.col as i8 - from.col as i8).signum();

    let mut current = from;
    loop {
        current = match current.offset(step_row, step_col) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

/// A slider of `kind` on `from` reaches `to` along an unobstructed line.
/// Non-sliding kinds never match.
pub fn slider_reaches(board: &Board, kind: PieceKind, from: Square, to: Square) -> bool {
    let on_line = match kind {
        PieceKind::Bishop => is_diagonal(from, to),
        PieceKind::Rook => is_straight(from, to),
        PieceKind::Queen => is_diagonal(from, to) || is_straight(from, to),
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
    };
    on_line && path_is_clear(board, from, to)
}
