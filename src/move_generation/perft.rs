//! Perft node counting over the brute-force generator and the fast path.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::AppliedMove;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

/// Count leaf nodes `depth` plies below `game_state`. The state is left as
/// it was found.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_moves(game_state) {
        let Some(mut child) = game_state.scoped_move(mv.from, mv.to) else {
            continue;
        };
        if depth == 1 {
            total.merge(classify_leaf(&child));
        } else {
            total.merge(perft(&mut child, depth - 1));
        }
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for mv in generate_moves(game_state) {
        if let Some(mut child) = game_state.scoped_move(mv.from, mv.to) {
            out.push((mv, perft(&mut child, depth - 1).nodes));
        }
    }
    out
}

fn classify_leaf(applied: &AppliedMove<'_>) -> PerftCounts {
    let undo = applied.undo_state();
    let promoted = undo.moved_piece.kind == PieceKind::Pawn
        && applied.piece_at(undo.to).map(|p| p.kind) == Some(PieceKind::Queen);
    PerftCounts {
        nodes: 1,
        captures: u64::from(undo.captured_piece.is_some()),
        castles: u64::from(undo.rook_relocation.is_some()),
        promotions: u64::from(promoted),
    }
}
