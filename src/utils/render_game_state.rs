//! Board renderers.
//!
//! `render_grid` and `render_flat` emit the same character encoding that
//! `utils::board_text` parses. `render_pretty` is a labelled Unicode diagram
//! for terminals and log output, light's back rank at the bottom.

use crate::game_state::chess_types::*;
use crate::utils::board_text::EMPTY_SQUARE_CHAR;

fn square_char(board: &Board, square: Square) -> char {
    board
        .piece_at(square)
        .map_or(EMPTY_SQUARE_CHAR, Piece::to_char)
}

/// Eight newline-separated rows, row 0 first, no trailing newline.
pub fn render_grid(board: &Board) -> String {
    (0..BOARD_SIZE as u8)
        .map(|row| {
            (0..BOARD_SIZE as u8)
                .map(|col| square_char(board, Square::new(row, col)))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// All 64 squares in row-major order.
pub fn render_flat(board: &Board) -> String {
    Square::all().map(|square| square_char(board, square)).collect()
}

pub fn render_pretty(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE as u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
