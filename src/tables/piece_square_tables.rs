//! Positional bonus tables.
//!
//! Authored from the light side's point of view: index `[row][col]` with row
//! 0 being the far (dark) back rank. Dark pieces read the row-mirrored entry
//! and the scorer negates it.

use crate::game_state::chess_types::{Color, PieceKind, Square};

#[rustfmt::skip]
pub const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// Shared by bishops and queens.
#[rustfmt::skip]
pub const CENTRAL_CONTROL_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

/// Unsigned bonus for a piece of `kind`/`color` on `square`. Rooks and kings
/// carry no positional term.
#[inline]
pub fn piece_square_bonus(kind: PieceKind, color: Color, square: Square) -> i32 {
    let row = match color {
        Color::Light => square.row as usize,
        Color::Dark => 7 - square.row as usize,
    };
    let col = square.col as usize;
    match kind {
        PieceKind::Pawn => PAWN_TABLE[row][col],
        PieceKind::Knight => KNIGHT_TABLE[row][col],
        PieceKind::Bishop | PieceKind::Queen => CENTRAL_CONTROL_TABLE[row][col],
        PieceKind::Rook | PieceKind::King => 0,
    }
}
