//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Scores are from a fixed point of view: positive favours light, negative
//! favours dark, regardless of who is on move. Search maximizes for light
//! and minimizes for dark on top of that convention.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::count_moves_for;
use crate::moves::king_moves::king_neighbours;
use crate::moves::pawn_moves::rows_from_start;
use crate::tables::piece_square_tables::piece_square_bonus;

pub trait BoardScorer {
    /// Light-positive static score. Implementations may mutate the state
    /// transiently but must hand it back unchanged.
    fn score(&self, game_state: &mut GameState) -> i32;
}

pub const KING_SAFETY_BONUS: i32 = 8;
pub const PAWN_ADVANCE_BONUS: i32 = 5;
pub const PASSED_PAWN_BONUS: i32 = 67;
pub const MOBILITY_WEIGHT: i32 = 2;

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Material plus piece-square bonus, signed by colour.
pub fn material_and_position_term(game_state: &GameState) -> i32 {
    game_state
        .board
        .occupied()
        .map(|(square, piece)| {
            let unsigned =
                piece_value(piece.kind) + piece_square_bonus(piece.kind, piece.color, square);
            piece.color.sign() * unsigned
        })
        .sum()
}

/// Friendly pieces adjacent to each king.
pub fn king_safety_term(game_state: &GameState) -> i32 {
    let board = &game_state.board;
    board
        .occupied()
        .filter(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(king_sq, king)| {
            let shelter = king_neighbours(king_sq)
                .filter(|sq| board.piece_at(*sq).is_some_and(|p| p.color == king.color))
                .count() as i32;
            king.color.sign() * shelter * KING_SAFETY_BONUS
        })
        .sum()
}

/// No enemy pawn on the pawn's file or an adjacent file, on any row ahead of
/// it toward promotion.
pub fn is_passed_pawn(board: &Board, square: Square, color: Color) -> bool {
    let enemy_pawn = Piece::new(PieceKind::Pawn, color.opposite());
    let ahead = |row: u8| match color {
        Color::Light => row < square.row,
        Color::Dark => row > square.row,
    };

    !board.occupied().any(|(sq, piece)| {
        piece == enemy_pawn && ahead(sq.row) && (sq.col as i8 - square.col as i8).abs() <= 1
    })
}

/// Advancement bonus plus passed-pawn bonus, signed by colour.
pub fn pawn_structure_term(game_state: &GameState) -> i32 {
    let board = &game_state.board;
    board
        .occupied()
        .filter(|(_, piece)| piece.kind == PieceKind::Pawn)
        .map(|(square, pawn)| {
            let mut bonus = rows_from_start(pawn.color, square) * PAWN_ADVANCE_BONUS;
            if is_passed_pawn(board, square, pawn.color) {
                bonus += PASSED_PAWN_BONUS;
            }
            pawn.color.sign() * bonus
        })
        .sum()
}

/// Legal move count difference, light minus dark. Each side is counted with
/// the move handed to it temporarily; the side to move is restored after.
pub fn mobility_term(game_state: &mut GameState) -> i32 {
    let light = count_moves_for(game_state, Color::Light) as i32;
    let dark = count_moves_for(game_state, Color::Dark) as i32;
    (light - dark) * MOBILITY_WEIGHT
}

/// Material and position only. Much cheaper than `StandardScorer` because it
/// never generates moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        material_and_position_term(game_state)
    }
}

/// The full evaluation: material and position, king safety, pawn structure
/// and mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        material_and_position_term(game_state)
            + king_safety_term(game_state)
            + pawn_structure_term(game_state)
            + mobility_term(game_state)
    }
}
