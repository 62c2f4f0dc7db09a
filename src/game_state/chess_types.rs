/// Core board-model types shared by every engine subsystem.
///
/// Squares are addressed by `(row, col)` where row 0 is the dark back rank
/// and row 7 is the light back rank. Pieces are a tagged `{kind, color}` pair
/// so that every rule dispatches on an exhaustive `match` instead of on raw
/// character codes.
use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

pub const BOARD_SIZE: usize = 8;

/// Side to move. `Light` renders uppercase and is the maximizing colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// +1 for light, -1 for dark.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used by the board text encoding.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn to_char(self) -> char {
        let c = self.kind.symbol();
        match self.color {
            Color::Light => c.to_ascii_uppercase(),
            Color::Dark => c,
        }
    }

    /// Decode a board letter. Returns `None` for `'.'` and unknown characters.
    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self::new(kind, color))
    }
}

/// Board coordinate. Fields are public so callers can hand in arbitrary
/// coordinates; the legality engine rejects anything off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Step by `(d_row, d_col)`, or `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::utils::algebraic::square_to_algebraic(*self))
    }
}

/// 8x8 grid of square contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Contents of `square`; off-board squares read as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// `square` must be on the board.
    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        debug_assert!(square.is_on_board(), "set on off-board square {square:?}");
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// `square` must be on the board.
    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        debug_assert!(square.is_on_board(), "take on off-board square {square:?}");
        self.squares[square.row as usize][square.col as usize].take()
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Per-colour, per-side castling eligibility.
///
/// Flags only ever go from `true` to `false` through `revoke`; the fast-path
/// undo is the one place a whole previous value is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub(crate) light_king_side: bool,
    pub(crate) light_queen_side: bool,
    pub(crate) dark_king_side: bool,
    pub(crate) dark_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        light_king_side: true,
        light_queen_side: true,
        dark_king_side: true,
        dark_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        light_king_side: false,
        light_queen_side: false,
        dark_king_side: false,
        dark_queen_side: false,
    };

    #[inline]
    pub fn get(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::Light, CastleSide::KingSide) => self.light_king_side,
            (Color::Light, CastleSide::QueenSide) => self.light_queen_side,
            (Color::Dark, CastleSide::KingSide) => self.dark_king_side,
            (Color::Dark, CastleSide::QueenSide) => self.dark_queen_side,
        }
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::Light, CastleSide::KingSide) => self.light_king_side = false,
            (Color::Light, CastleSide::QueenSide) => self.light_queen_side = false,
            (Color::Dark, CastleSide::KingSide) => self.dark_king_side = false,
            (Color::Dark, CastleSide::QueenSide) => self.dark_queen_side = false,
        }
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::KingSide);
        self.revoke(color, CastleSide::QueenSide);
    }

    pub fn any(&self, color: Color) -> bool {
        self.get(color, CastleSide::KingSide) || self.get(color, CastleSide::QueenSide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_chars_round_trip_case_encodes_color() {
        let q = Piece::from_char('Q').expect("Q is a piece");
        assert_eq!(q, Piece::new(PieceKind::Queen, Color::Light));
        assert_eq!(Piece::new(PieceKind::Knight, Color::Dark).to_char(), 'n');
        assert_eq!(Piece::from_char('.'), None);
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn square_offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2)));
        assert!(!Square::new(8, 0).is_on_board());
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn castling_rights_revoke_is_one_way() {
        let mut rights = CastlingRights::ALL;
        rights.revoke(Color::Light, CastleSide::QueenSide);
        assert!(!rights.get(Color::Light, CastleSide::QueenSide));
        assert!(rights.get(Color::Light, CastleSide::KingSide));
        rights.revoke_all(Color::Dark);
        assert!(!rights.any(Color::Dark));
        assert!(rights.any(Color::Light));
    }

    #[test]
    fn off_board_reads_are_empty() {
        let board = Board::empty();
        assert_eq!(board.piece_at(Square::new(8, 0)), None);
        assert!(board.is_empty(Square::new(0, 8)));
    }

    #[test]
    #[should_panic(expected = "off-board")]
    #[cfg(debug_assertions)]
    fn writing_off_board_is_rejected() {
        let mut board = Board::empty();
        board.set(Square::new(0, 8), Some(Piece::new(PieceKind::Rook, Color::Light)));
    }
}
