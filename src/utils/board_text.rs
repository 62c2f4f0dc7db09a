//! Board-text-to-GameState parser.
//!
//! The encoding is 64 square characters in row-major order starting at row 0
//! (dark's back rank). Uppercase letters are light pieces, lowercase are
//! dark, `.` is an empty square. Whitespace is ignored, so the same text can
//! be written flat or as an 8-line grid. Castling rights are granted for each
//! corner whose king and rook both stand on their home squares.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{king_home, rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};

pub const EMPTY_SQUARE_CHAR: char = '.';

pub fn parse_board_text(text: &str, side_to_move: Color) -> Result<GameState, ChessError> {
    let squares: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if squares.len() != BOARD_SIZE * BOARD_SIZE {
        return Err(ChessError::InvalidBoardLength(squares.len()));
    }

    let mut game_state = GameState::new_empty();
    for (index, (square, ch)) in Square::all().zip(squares).enumerate() {
        let piece = parse_square_char(ch).ok_or(ChessError::InvalidPieceChar(ch, index))?;
        game_state.board.set(square, piece);
    }

    game_state.side_to_move = side_to_move;
    game_state.castling_rights = rights_from_home_squares(&game_state.board);
    Ok(game_state)
}

/// `Some(None)` for an empty square, `None` for an unknown character.
fn parse_square_char(ch: char) -> Option<Option<Piece>> {
    if ch == EMPTY_SQUARE_CHAR {
        return Some(None);
    }
    Piece::from_char(ch).map(Some)
}

fn rights_from_home_squares(board: &Board) -> CastlingRights {
    let mut rights = CastlingRights::ALL;
    for color in [Color::Light, Color::Dark] {
        let king = Piece::new(PieceKind::King, color);
        let rook = Piece::new(PieceKind::Rook, color);
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            let at_home = board.piece_at(king_home(color)) == Some(king)
                && board.piece_at(rook_home(color, side)) == Some(rook);
            if !at_home {
                rights.revoke(color, side);
            }
        }
    }
    rights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_ROWS;
    use pretty_assertions::assert_eq;

    #[test]
    fn grid_and_flat_forms_parse_to_the_same_state() {
        let grid = STARTING_POSITION_ROWS.join("\n");
        let flat = STARTING_POSITION_ROWS.concat();

        let from_grid = parse_board_text(&grid, Color::Light).expect("grid parses");
        let from_flat = parse_board_text(&flat, Color::Light).expect("flat parses");

        assert_eq!(from_grid, from_flat);
        assert_eq!(from_grid, GameState::new_game());
    }

    #[test]
    fn side_to_move_is_taken_from_the_caller() {
        let game = parse_board_text(&STARTING_POSITION_ROWS.concat(), Color::Dark).expect("parses");
        assert!(game.is_turn(Color::Dark));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn castling_rights_follow_home_squares() {
        let game = parse_board_text(
            "....k..r\
             ........\
             ........\
             ........\
             ........\
             ........\
             ........\
             R...K...",
            Color::Light,
        )
        .expect("parses");
        let rights = game.castling_rights();

        assert!(rights.get(Color::Light, CastleSide::QueenSide));
        assert!(!rights.get(Color::Light, CastleSide::KingSide));
        assert!(rights.get(Color::Dark, CastleSide::KingSide));
        assert!(!rights.get(Color::Dark, CastleSide::QueenSide));
    }

    #[test]
    fn misplaced_king_grants_no_rights() {
        let game = parse_board_text(
            "r..k...r\
             ........\
             ........\
             ........\
             ........\
             ........\
             ........\
             R..K...R",
            Color::Light,
        )
        .expect("parses");
        assert_eq!(game.castling_rights(), CastlingRights::NONE);
    }

    #[test]
    fn wrong_length_is_reported() {
        let err = parse_board_text("rnbqkbnr", Color::Light).unwrap_err();
        assert_eq!(err, ChessError::InvalidBoardLength(8));

        let too_long = format!("{}.", STARTING_POSITION_ROWS.concat());
        let err = parse_board_text(&too_long, Color::Light).unwrap_err();
        assert_eq!(err, ChessError::InvalidBoardLength(65));
    }

    #[test]
    fn unknown_character_is_reported_with_its_index() {
        let mut text = STARTING_POSITION_ROWS.concat();
        text.replace_range(20..21, "x");
        let err = parse_board_text(&text, Color::Light).unwrap_err();
        assert_eq!(err, ChessError::InvalidPieceChar('x', 20));
    }
}
