//! Ray casting shared by every non-pawn piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::CandidateMove;

/// Occupancy of a destination from the mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Empty,
    Opponent,
    Own,
}

#[inline]
pub fn classify_landing(game_state: &GameState, square: Square, mover: Color) -> Landing {
    match game_state.piece_at(square) {
        None => Landing::Empty,
        Some(piece) if piece.is_opponent_of(mover) => Landing::Opponent,
        Some(_) => Landing::Own,
    }
}

/// Walks each direction from `from` for at most `max_steps` squares.
///
/// Empty squares are emitted as quiet moves and the walk continues; an
/// opponent's square is emitted as a capture and ends the ray; the mover's own
/// piece or the board edge ends the ray without emitting anything.
pub fn cast_rays(
    game_state: &GameState,
    from: Square,
    mover: Color,
    directions: &[(i8, i8)],
    max_steps: usize,
    out: &mut Vec<CandidateMove>,
) {
    for &(dx, dy) in directions {
        let mut current = from;
        for _ in 0..max_steps {
            let Some(next) = current.offset(dx, dy) else {
                break;
            };

            match classify_landing(game_state, next, mover) {
                Landing::Empty => out.push(CandidateMove::quiet(next)),
                Landing::Opponent => {
                    out.push(CandidateMove::capture(next));
                    break;
                }
                Landing::Own => break,
            }

            current = next;
        }
    }
}
