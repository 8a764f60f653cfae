//! Movement rule per piece kind.
//!
//! Knights, bishops, rooks, queens and kings differ only in their direction
//! set and how far they may travel along each direction, so they are described
//! as data and share one ray-casting routine. Pawns keep a dedicated rule.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::PieceKind;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Longest possible ray on the board.
pub const MAX_RAY_STEPS: usize = BOARD_SIZE - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementRule {
    Pawn,
    /// Walk each direction up to `max_steps` squares, stopping at the first
    /// occupied square.
    Rays {
        directions: &'static [(i8, i8)],
        max_steps: usize,
    },
}

pub const fn movement_rule(kind: PieceKind) -> MovementRule {
    match kind {
        PieceKind::Pawn => MovementRule::Pawn,
        PieceKind::Knight => MovementRule::Rays {
            directions: &KNIGHT_OFFSETS,
            max_steps: 1,
        },
        PieceKind::Bishop => MovementRule::Rays {
            directions: &BISHOP_DIRECTIONS,
            max_steps: MAX_RAY_STEPS,
        },
        PieceKind::Rook => MovementRule::Rays {
            directions: &ROOK_DIRECTIONS,
            max_steps: MAX_RAY_STEPS,
        },
        PieceKind::Queen => MovementRule::Rays {
            directions: &QUEEN_DIRECTIONS,
            max_steps: MAX_RAY_STEPS,
        },
        PieceKind::King => MovementRule::Rays {
            directions: &KING_OFFSETS,
            max_steps: 1,
        },
    }
}
