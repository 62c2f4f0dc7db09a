//! Errors returned by the engine's fallible entry points.
//!
//! Move legality is not an error: `make_move` and `is_valid_move` answer with
//! a `bool`. `ChessError` covers malformed input handed to the crate, such as
//! board text and difficulty levels.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Board text did not contain exactly 64 square characters once
    /// whitespace was removed.
    ///
    /// Payload: the number of square characters found.
    #[error("board text must describe 64 squares, found {0}")]
    InvalidBoardLength(usize),

    /// A square character was neither `.` nor a piece letter.
    ///
    /// Payload: (offending character, row-major square index).
    #[error("invalid piece character '{0}' at square {1}")]
    InvalidPieceChar(char, usize),

    #[error("difficulty level {0} is out of range (expected 1-5)")]
    InvalidDifficulty(u8),

    #[error("search depth must be at least 1")]
    ZeroSearchDepth,
}
