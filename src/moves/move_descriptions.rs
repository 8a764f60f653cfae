//! Move values exchanged with callers.
//!
//! A `CandidateMove` is what generation hands out and what the applier takes
//! back. En passant is not encoded in the candidate: the applier re-derives it
//! from the board, the mover and the en passant file sets.

use crate::game_state::chess_types::{Piece, Square};

/// Pseudo-legal destination for a piece: ignores whether the mover's king
/// would be left capturable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub to: Square,
    pub is_capture: bool,
}

impl CandidateMove {
    #[inline]
    pub const fn quiet(to: Square) -> Self {
        Self {
            to,
            is_capture: false,
        }
    }

    #[inline]
    pub const fn capture(to: Square) -> Self {
        Self {
            to,
            is_capture: true,
        }
    }
}

/// What happened when a candidate was applied.
///
/// `check` and `promotion` are `None` because this engine does not evaluate
/// those rules; see `chess_rules::RULE_SUPPORT`. A `Some(false)` is never
/// produced, so callers cannot mistake "not evaluated" for "not in check".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub en_passant: bool,
    pub check: Option<bool>,
    pub promotion: Option<bool>,
}

impl MoveResult {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
