//! Move record exchanged between the generator, the search and callers.

use std::fmt;

use crate::game_state::chess_types::Square;

/// A `(from, to)` coordinate pair plus the score written by the search.
///
/// The generator always leaves `score` at zero; only the search drivers
/// populate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub score: i32,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to, score: 0 }
    }

    #[inline]
    pub const fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Self {
        Self::new(Square::new(from_row, from_col), Square::new(to_row, to_col))
    }

    /// Same origin and destination, ignoring the score.
    #[inline]
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::Move;

    #[test]
    fn display_uses_square_names() {
        let mv = Move::from_coords(6, 4, 4, 4);
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.score, 0);
    }

    #[test]
    fn same_squares_ignores_score() {
        let a = Move::from_coords(7, 6, 5, 5);
        let mut b = a;
        b.score = 42;
        assert!(a.same_squares(&b));
        assert_ne!(a, b);
    }
}
