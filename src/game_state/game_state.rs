//! Mailbox game state.
//!
//! `GameState` bundles the board with the side to move, the move counter and
//! the castling rights. Every mutation goes through one of the two move
//! application paths in `move_generation::legal_move_apply`; the fields are
//! read-only outside the crate. `Clone` is a full deep copy (the grid and the
//! rights are plain values), so independent searches can run on clones.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_ROWS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_moves, has_any_legal_move};
use crate::move_generation::legal_move_validator::is_valid_move;
use crate::moves::chess_move::Move;
use crate::search::alpha_beta::{best_move, SearchConfig};
use crate::search::board_scoring::{BoardScorer, StandardScorer};
use crate::utils::board_text::parse_board_text;
use crate::utils::render_game_state::{render_flat, render_grid, render_pretty};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) move_count: u32,
    pub(crate) castling_rights: CastlingRights,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Empty board, light to move, no castling rights.
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::Light,
            move_count: 0,
            castling_rights: CastlingRights::NONE,
        }
    }

    /// Canonical starting position.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for (row, line) in STARTING_POSITION_ROWS.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.set(Square::new(row as u8, col as u8), Piece::from_char(ch));
            }
        }

        Self {
            board,
            side_to_move: Color::Light,
            move_count: 0,
            castling_rights: CastlingRights::ALL,
        }
    }

    /// Build a position from the board text encoding (flat or 8-row grid).
    pub fn from_board_str(text: &str, side_to_move: Color) -> Result<Self, ChessError> {
        parse_board_text(text, side_to_move)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn is_turn(&self, color: Color) -> bool {
        self.side_to_move == color
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Validated move path. Returns `false` without touching the state when
    /// the move is illegal.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        make_move(self, from, to)
    }

    pub fn is_valid_move(&mut self, from: Square, to: Square) -> bool {
        is_valid_move(self, from, to)
    }

    pub fn generate_moves(&mut self) -> Vec<Move> {
        generate_moves(self)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// The side to move has no legal move.
    pub fn is_game_over(&mut self) -> bool {
        !has_any_legal_move(self)
    }

    pub fn outcome(&mut self) -> Option<GameOutcome> {
        if has_any_legal_move(self) {
            return None;
        }
        let side = self.side_to_move;
        if self.is_in_check(side) {
            Some(GameOutcome::Checkmate {
                winner: side.opposite(),
            })
        } else {
            Some(GameOutcome::Stalemate)
        }
    }

    /// Static score, positive favouring light.
    pub fn evaluate(&mut self) -> i32 {
        StandardScorer.score(self)
    }

    /// Best move for the side to move at `depth` plies, score populated.
    pub fn get_best_move(&mut self, depth: u8) -> Option<Move> {
        best_move(self, &StandardScorer, SearchConfig { depth }).best_move
    }

    pub fn render_grid(&self) -> String {
        render_grid(&self.board)
    }

    pub fn render_flat(&self) -> String {
        render_flat(&self.board)
    }

    pub fn render_pretty(&self) -> String {
        render_pretty(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::{GameOutcome, GameState};
    use crate::game_state::chess_types::{CastleSide, Color, Square};

    #[test]
    fn new_game_has_light_to_move_and_full_rights() {
        let game = GameState::new_game();
        assert!(game.is_turn(Color::Light));
        assert!(!game.is_turn(Color::Dark));
        assert_eq!(game.move_count(), 0);
        assert!(game.castling_rights().get(Color::Dark, CastleSide::QueenSide));
        assert_eq!(game.board().occupied().count(), 32);
    }

    #[test]
    fn clone_is_independent_of_original() {
        let original = GameState::new_game();
        let mut copy = original.clone();

        assert!(copy.make_move(Square::new(7, 6), Square::new(5, 5)));
        assert!(copy.make_move(Square::new(1, 4), Square::new(3, 4)));
        assert!(copy.make_move(Square::new(7, 7), Square::new(7, 6)));

        assert_eq!(original, GameState::new_game());
        assert!(original.is_turn(Color::Light));
        assert!(original
            .castling_rights()
            .get(Color::Light, CastleSide::KingSide));
        assert!(!copy.castling_rights().get(Color::Light, CastleSide::KingSide));
        assert_ne!(original.render_flat(), copy.render_flat());
    }

    #[test]
    fn fools_mate_is_reported_as_checkmate() {
        let mut game = GameState::new_game();
        assert!(game.make_move(Square::new(6, 5), Square::new(5, 5)));
        assert!(game.make_move(Square::new(1, 4), Square::new(3, 4)));
        assert!(game.make_move(Square::new(6, 6), Square::new(4, 6)));
        assert!(game.make_move(Square::new(0, 3), Square::new(4, 7)));

        assert!(game.is_game_over());
        assert_eq!(
            game.outcome(),
            Some(GameOutcome::Checkmate {
                winner: Color::Dark
            })
        );
    }

    #[test]
    fn cornered_king_without_check_is_stalemate() {
        let mut game = GameState::from_board_str(
            "k.......\
             ..Q.....\
             .K......\
             ........\
             ........\
             ........\
             ........\
             ........",
            Color::Dark,
        )
        .expect("board should parse");

        assert!(!game.is_in_check(Color::Dark));
        assert_eq!(game.outcome(), Some(GameOutcome::Stalemate));
    }

    #[test]
    fn start_position_is_not_over() {
        let mut game = GameState::new_game();
        assert!(!game.is_game_over());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn best_move_is_legal_and_leaves_state_alone() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = game.get_best_move(2).expect("start has moves");

        assert_eq!(game, before);
        assert!(game.is_valid_move(mv.from, mv.to));
        assert!(game.make_move(mv.from, mv.to));
        assert!(game.is_turn(Color::Dark));
    }
}
