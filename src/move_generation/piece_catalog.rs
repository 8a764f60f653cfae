//! Dispatch from a piece to its movement rule.
//!
//! Callers guarantee that `from` holds `piece` and that `piece` belongs to the
//! side to move; `move_generator` enforces that before calling in.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::cast_rays;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::movement_rules::{movement_rule, MovementRule};

pub fn generate_piece_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    match movement_rule(piece.kind) {
        MovementRule::Pawn => generate_pawn_moves(game_state, from, piece.color, out),
        MovementRule::Rays {
            directions,
            max_steps,
        } => cast_rays(game_state, from, piece.color, directions, max_steps, out),
    }
}

pub fn piece_moves(game_state: &GameState, from: Square, piece: Piece) -> Vec<CandidateMove> {
    let mut out = Vec::with_capacity(32);
    generate_piece_moves(game_state, from, piece, &mut out);
    out
}
