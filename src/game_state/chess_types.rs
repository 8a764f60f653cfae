//! Core value types shared by the board, the move rules and the applier.
//!
//! Pieces carry an explicit `(kind, color)` pair. The signed-integer encoding
//! used by rendering collaborators (`1..=6` for the kind, sign for the color,
//! `0` for empty) is available through `Piece::code` / `Piece::from_code`, but
//! ownership tests inside the engine go through named comparisons.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction of pawn travel along y. White starts at y=6 and moves toward y=0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
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
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Magnitude of the signed piece code.
    #[inline]
    pub const fn code(self) -> i8 {
        self.index() as i8 + 1
    }

    #[inline]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece on the board: what it is and who owns it.
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

    #[inline]
    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, Color::White)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, Color::Black)
    }

    /// Signed code: positive for White, negative for Black, magnitude is the kind.
    #[inline]
    pub const fn code(self) -> i8 {
        self.kind.code() * self.color.sign()
    }

    /// Inverse of [`Piece::code`]. `0` and out-of-range magnitudes yield `None`.
    pub const fn from_code(code: i8) -> Option<Self> {
        let color = if code > 0 { Color::White } else { Color::Black };
        match PieceKind::from_code(code.saturating_abs()) {
            Some(kind) => Some(Self::new(kind, color)),
            None => None,
        }
    }

    #[inline]
    pub fn is_opponent_of(self, color: Color) -> bool {
        self.color != color
    }

    #[inline]
    pub fn belongs_to(self, color: Color) -> bool {
        self.color == color
    }
}

/// Board coordinate. `x` grows rightward, `y` grows from Black's back rank
/// (`y == 0`) toward White's (`y == 7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Returns `None` for coordinates outside the board.
    #[inline]
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    pub fn try_new(x: i32, y: i32) -> ChessResult<Self> {
        Self::new(x, y).ok_or(ChessErrors::InvalidSquare { x, y })
    }

    #[inline]
    pub const fn x(self) -> usize {
        self.x as usize
    }

    #[inline]
    pub const fn y(self) -> usize {
        self.y as usize
    }

    /// The square displaced by `(dx, dy)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::new(self.x as i32 + dx as i32, self.y as i32 + dy as i32)
    }

    /// All 64 squares, row by row from `y == 0`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Square { x, y }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Set of files on which a pawn of one color just advanced two squares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnPassantFiles(u8);

impl EnPassantFiles {
    #[inline]
    pub fn insert(&mut self, file: usize) {
        if file < BOARD_SIZE {
            self.0 |= 1 << file;
        }
    }

    #[inline]
    pub fn contains(self, file: usize) -> bool {
        file < BOARD_SIZE && (self.0 & (1 << file)) != 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn files(self) -> impl Iterator<Item = usize> {
        (0..BOARD_SIZE).filter(move |&file| self.contains(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_code_sign_tracks_color() {
        assert_eq!(Piece::white(PieceKind::Pawn).code(), 1);
        assert_eq!(Piece::black(PieceKind::King).code(), -6);
        assert_eq!(Piece::from_code(-4), Some(Piece::black(PieceKind::Rook)));
        assert_eq!(Piece::from_code(5), Some(Piece::white(PieceKind::Queen)));
        assert_eq!(Piece::from_code(0), None);
        assert_eq!(Piece::from_code(7), None);
        assert_eq!(Piece::from_code(i8::MIN), None);
    }

    #[test]
    fn square_rejects_off_board_coordinates() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(-1, 3).is_none());
        assert!(Square::new(3, 8).is_none());
        assert!(matches!(
            Square::try_new(8, 0),
            Err(ChessErrors::InvalidSquare { x: 8, y: 0 })
        ));
    }

    #[test]
    fn square_offset_stays_on_board() {
        let corner = Square::new(0, 7).unwrap();
        assert_eq!(corner.offset(1, -1), Square::new(1, 6));
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn en_passant_files_insert_and_clear() {
        let mut files = EnPassantFiles::default();
        assert!(files.is_empty());
        files.insert(4);
        files.insert(0);
        files.insert(9);
        assert!(files.contains(4));
        assert!(!files.contains(3));
        assert_eq!(files.files().collect::<Vec<_>>(), vec![0, 4]);
        files.clear();
        assert!(files.is_empty());
    }
}
