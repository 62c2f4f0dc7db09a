//! Depth-limited minimax with alpha-beta pruning.
//!
//! Light maximizes and dark minimizes over the light-positive scores of a
//! `BoardScorer`. Moves are searched in generation order with no ordering
//! heuristic. Each child is visited through a scoped fast-path application,
//! so the board is restored before the next sibling, including when a cutoff
//! breaks the loop.

use log::{debug, info, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_moves;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::BoardScorer;
use crate::search::difficulty::Difficulty;

/// Returned when the side to move has no legal move. Checkmate and stalemate
/// share this value.
pub const MATE_SCORE: i32 = 30000;
pub const INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move with its score populated, or `None` when the side to move
    /// has no legal move.
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

/// Score for a node whose side to move has no legal move.
#[inline]
pub const fn no_move_score(maximizing: bool) -> i32 {
    if maximizing {
        -MATE_SCORE
    } else {
        MATE_SCORE
    }
}

/// `candidate` beats `incumbent` for the side choosing. Ties keep the
/// incumbent.
#[inline]
pub(crate) const fn strictly_better(candidate: i32, incumbent: i32, maximizing: bool) -> bool {
    if maximizing {
        candidate > incumbent
    } else {
        candidate < incumbent
    }
}

pub fn alpha_beta<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        stats.leaves += 1;
        return scorer.score(game_state);
    }

    let moves = generate_moves(game_state);
    if moves.is_empty() {
        return no_move_score(maximizing);
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in moves {
        let score = {
            let Some(mut child) = game_state.scoped_move(mv.from, mv.to) else {
                continue;
            };
            alpha_beta(&mut child, scorer, depth - 1, alpha, beta, !maximizing, stats)
        };

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            trace!("cutoff after {mv} at depth {depth}");
            break;
        }
    }

    best
}

/// Root driver: pick the move that is strictly best for the side to move.
///
/// A depth of zero is searched as depth one.
pub fn best_move<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let depth = config.depth.max(1);
    let maximizing = game_state.side_to_move == Color::Light;
    let mut stats = SearchStats {
        nodes: 1,
        ..SearchStats::default()
    };

    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best: Option<Move> = None;

    for mv in generate_moves(game_state) {
        let score = {
            let Some(mut child) = game_state.scoped_move(mv.from, mv.to) else {
                continue;
            };
            alpha_beta(&mut child, scorer, depth - 1, alpha, beta, !maximizing, &mut stats)
        };

        // Once the window narrows, a move that does not replace the incumbent
        // only returns a bound.
        let replace = match best {
            None => true,
            Some(incumbent) => strictly_better(score, incumbent.score, maximizing),
        };
        if replace {
            debug!("root move {mv} is new best with score {score}");
            best = Some(Move { score, ..mv });
        } else {
            trace!("root move {mv} bounded at {score}, keeping incumbent");
        }

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
    }

    match best {
        Some(mv) => info!(
            "depth {depth}: {} plays {mv} ({}) after {} nodes",
            game_state.side_to_move, mv.score, stats.nodes
        ),
        None => info!("depth {depth}: {} has no legal move", game_state.side_to_move),
    }

    SearchResult {
        best_move: best,
        stats,
    }
}
