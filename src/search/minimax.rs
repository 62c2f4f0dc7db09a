//! Plain minimax without pruning. Slow, but the reference `alpha_beta`
//! must agree with on both the chosen move and its score.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_moves;
use crate::moves::chess_move::Move;
use crate::search::alpha_beta::{
    no_move_score, strictly_better, SearchConfig, SearchResult, SearchStats,
};
use crate::search::board_scoring::BoardScorer;

pub fn minimax<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
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

    let scores = moves.into_iter().filter_map(|mv| {
        let mut child = game_state.scoped_move(mv.from, mv.to)?;
        Some(minimax(&mut child, scorer, depth - 1, !maximizing, stats))
    });
    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or_else(|| no_move_score(maximizing))
}

/// Same root rules as `alpha_beta::best_move`: depth clamped to one, first of
/// equally scored moves wins.
pub fn best_move_minimax<S: BoardScorer>(
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

    let mut best: Option<Move> = None;
    for mv in generate_moves(game_state) {
        let score = {
            let Some(mut child) = game_state.scoped_move(mv.from, mv.to) else {
                continue;
            };
            minimax(&mut child, scorer, depth - 1, !maximizing, &mut stats)
        };
        if best.map_or(true, |incumbent| strictly_better(score, incumbent.score, maximizing)) {
            best = Some(Move { score, ..mv });
        }
    }

    SearchResult {
        best_move: best,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::MaterialScorer;

    #[test]
    fn depth_zero_is_the_static_score() {
        let mut game = GameState::new_game();
        let mut stats = SearchStats::default();
        assert_eq!(minimax(&mut game, &MaterialScorer, 0, true, &mut stats), 0);
        assert_eq!(stats, SearchStats { nodes: 1, leaves: 1, cutoffs: 0 });
    }

    #[test]
    fn visits_every_node_of_the_tree() {
        let mut game = GameState::new_game();
        let result = best_move_minimax(&mut game, &MaterialScorer, SearchConfig { depth: 2 });
        // Root, 20 replies, 400 leaves.
        assert_eq!(result.stats.nodes, 1 + 20 + 400);
        assert_eq!(result.stats.leaves, 400);
        assert_eq!(result.stats.cutoffs, 0);
    }

    #[test]
    fn ties_keep_first_generated_move() {
        let mut game = GameState::from_board_str(
            "k.......\
             ........\
             ........\
             ........\
             ........\
             ........\
             ........\
             ....K...",
            Color::Light,
        )
        .expect("board should parse");
        let result = best_move_minimax(&mut game, &MaterialScorer, SearchConfig { depth: 1 });
        let mv = result.best_move.expect("king has moves");
        assert_eq!((mv.from, mv.to), (Square::new(7, 4), Square::new(6, 3)));
        assert_eq!(mv.score, 0);
    }
}
