//! Brute-force legal move enumeration.
//!
//! Every own piece is tried against all 64 destinations through the full
//! legality test. Output order is row-major over sources, then row-major
//! over destinations, and every generated move carries a zero score.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_validator::is_valid_move;
use crate::moves::chess_move::Move;

fn own_piece_squares(game_state: &GameState) -> Vec<Square> {
    let side = game_state.side_to_move;
    game_state
        .board
        .pieces_of(side)
        .map(|(square, _)| square)
        .collect()
}

pub fn generate_moves(game_state: &mut GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for from in own_piece_squares(game_state) {
        for to in Square::all() {
            if is_valid_move(game_state, from, to) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Stops at the first legal move found.
pub fn has_any_legal_move(game_state: &mut GameState) -> bool {
    own_piece_squares(game_state)
        .into_iter()
        .any(|from| Square::all().any(|to| is_valid_move(game_state, from, to)))
}

/// Number of legal moves `color` would have if it were on move.
pub fn count_moves_for(game_state: &mut GameState, color: Color) -> usize {
    let mut turn = game_state.scoped_turn(color);
    generate_moves(&mut turn).len()
}

#[cfg(test)]
mod tests {
    use super::{count_moves_for, generate_moves, has_any_legal_move};
    use crate::game_state::chess_types::*;

    #[test]
    fn start_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        let moves = generate_moves(&mut game);
        assert_eq!(moves.len(), 20);

        let pawn_moves = moves
            .iter()
            .filter(|mv| game.piece_at(mv.from).map(|p| p.kind) == Some(PieceKind::Pawn))
            .count();
        assert_eq!(pawn_moves, 16);
        assert!(moves.iter().all(|mv| mv.score == 0));
    }

    #[test]
    fn generation_order_is_row_major() {
        let mut game = GameState::new_game();
        let moves = generate_moves(&mut game);
        let keys: Vec<_> = moves
            .iter()
            .map(|mv| (mv.from.row, mv.from.col, mv.to.row, mv.to.col))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(moves[0].from, Square::new(6, 0));
        assert_eq!(moves[0].to, Square::new(4, 0));
    }

    #[test]
    fn dark_reply_count_and_state_restored() {
        let mut game = GameState::new_game();
        assert!(game.make_move(Square::new(6, 4), Square::new(4, 4)));
        let before = game.clone();
        assert_eq!(generate_moves(&mut game).len(), 20);
        assert_eq!(count_moves_for(&mut game, Color::Light), 30);
        assert_eq!(game, before);
    }

    #[test]
    fn castling_moves_are_generated() {
        let mut game = GameState::from_board_str(
            "r...k..r\
             ........\
             ........\
             ........\
             ........\
             ........\
             ........\
             R...K..R",
            Color::Light,
        )
        .expect("board should parse");
        let moves = generate_moves(&mut game);
        assert_eq!(moves.len(), 26);
        assert!(moves
            .iter()
            .any(|mv| mv.from == Square::new(7, 4) && mv.to == Square::new(7, 2)));
    }

    #[test]
    fn mated_side_has_no_moves() {
        let mut game = GameState::from_board_str(
            "......k.\
             .....ppp\
             ........\
             ........\
             ........\
             ........\
             ........\
             R.....K.",
            Color::Light,
        )
        .expect("board should parse");
        assert!(game.make_move(Square::new(7, 0), Square::new(0, 0)));
        assert!(!has_any_legal_move(&mut game));
        assert!(generate_moves(&mut game).is_empty());
    }
}
