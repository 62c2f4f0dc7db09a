//! Canonical chess-rule constants.
//!
//! Starting layout in the crate's board text encoding plus the home squares
//! that castling and rights bookkeeping key off.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard starting position, row 0 (dark back rank) first.
pub const STARTING_POSITION_ROWS: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

pub const KING_HOME_COL: u8 = 4;
pub const KING_SIDE_ROOK_COL: u8 = 7;
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(color.back_row(), KING_HOME_COL)
}

#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::KingSide => Square::new(color.back_row(), KING_SIDE_ROOK_COL),
        CastleSide::QueenSide => Square::new(color.back_row(), QUEEN_SIDE_ROOK_COL),
    }
}

/// King destination column after castling toward `side`.
#[inline]
pub const fn castle_king_target_col(side: CastleSide) -> u8 {
    match side {
        CastleSide::KingSide => 6,
        CastleSide::QueenSide => 2,
    }
}

/// Rook destination column after castling toward `side`.
#[inline]
pub const fn castle_rook_target_col(side: CastleSide) -> u8 {
    match side {
        CastleSide::KingSide => 5,
        CastleSide::QueenSide => 3,
    }
}

/// Which castling move, if any, a king step `from -> to` describes.
///
/// Only the geometry is checked here: the king must leave its home square and
/// travel exactly two columns along its back rank.
pub fn castle_side_for(color: Color, from: Square, to: Square) -> Option<CastleSide> {
    if from != king_home(color) || to.row != from.row {
        return None;
    }
    if to.col == castle_king_target_col(CastleSide::KingSide) {
        Some(CastleSide::KingSide)
    } else if to.col == castle_king_target_col(CastleSide::QueenSide) {
        Some(CastleSide::QueenSide)
    } else {
        None
    }
}

/// The colour/side whose castling right is tied to a rook standing on `square`.
pub fn rook_home_owner(square: Square) -> Option<(Color, CastleSide)> {
    for color in [Color::Light, Color::Dark] {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if rook_home(color, side) == square {
                return Some((color, side));
            }
        }
    }
    None
}
