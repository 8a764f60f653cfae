//! Errors used throughout the engine.
//!
//! `ChessErrors` is the single error type returned by board setup, move
//! queries and move application. Queries on empty squares or on pieces of the
//! side not to move are not errors: they return "no moves". Only the apply
//! path and raw coordinate validation reject input.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Coordinates outside `0..8` on either axis.
    #[error("square ({x}, {y}) is off the board")]
    InvalidSquare { x: i32, y: i32 },

    /// A move was applied from a square with no piece on it.
    #[error("no piece on {0} to move")]
    EmptySquare(Square),

    /// A move was applied for a piece that does not belong to the side to move.
    #[error("{piece:?} on {square} cannot move while {active} is to move")]
    WrongTurn {
        square: Square,
        piece: Piece,
        active: Color,
    },

    /// The candidate is not among the current candidate moves of `from`.
    #[error("candidate {to} (capture: {is_capture}) is not available from {from}")]
    StaleCandidate {
        from: Square,
        to: Square,
        is_capture: bool,
    },
}

pub type ChessResult<T> = Result<T, ChessErrors>;
