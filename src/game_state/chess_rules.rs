//! Canonical chess-rule constants.
//!
//! Board geometry, the standard starting placement in the signed piece
//! encoding, the ranks pawn rules depend on, and the material values used for
//! the running balance.

use crate::game_state::chess_types::{Color, PieceKind};

pub const BOARD_SIZE: usize = 8;

/// Standard starting position in signed piece codes, indexed `[y][x]`.
pub const STARTING_POSITION_CODES: [[i8; BOARD_SIZE]; BOARD_SIZE] = [
    [-4, -2, -3, -5, -6, -3, -2, -4],
    [-1, -1, -1, -1, -1, -1, -1, -1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [4, 2, 3, 5, 6, 3, 2, 4],
];

/// Rank a pawn of `color` may double-push from.
#[inline]
pub const fn pawn_start_rank(color: Color) -> usize {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Rank a pawn of `color` must stand on to capture en passant.
#[inline]
pub const fn en_passant_capture_rank(color: Color) -> usize {
    match color {
        Color::White => 3,
        Color::Black => 4,
    }
}

#[inline]
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Which parts of the full rules this engine evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSupport {
    pub check_detection: bool,
    pub castling: bool,
    pub promotion: bool,
}

pub const RULE_SUPPORT: RuleSupport = RuleSupport {
    check_detection: false,
    castling: false,
    promotion: false,
};
