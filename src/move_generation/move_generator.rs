//! Candidate move queries.
//!
//! A query distinguishes "nothing to move here" (`None`) from "a movable piece
//! with no candidates" (`Some(vec![])`). Squares that are empty, or hold a piece
//! of the side not to move, answer `None`.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::piece_catalog::{generate_piece_moves, piece_moves};
use crate::moves::move_descriptions::CandidateMove;

pub trait MoveGenerator: Send + Sync {
    fn candidate_moves(&self, game_state: &GameState, from: Square) -> Option<Vec<CandidateMove>>;

    /// Boundary entry for unvalidated coordinates.
    fn candidate_moves_at(
        &self,
        game_state: &GameState,
        x: i32,
        y: i32,
    ) -> ChessResult<Option<Vec<CandidateMove>>> {
        let from = Square::try_new(x, y)?;
        Ok(self.candidate_moves(game_state, from))
    }
}

/// Generates moves without filtering those that leave the mover's king
/// capturable.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn candidate_moves(&self, game_state: &GameState, from: Square) -> Option<Vec<CandidateMove>> {
        let piece = movable_piece(game_state, from)?;
        Some(piece_moves(game_state, from, piece))
    }
}

/// The piece on `from` if it belongs to the side to move.
#[inline]
pub fn movable_piece(game_state: &GameState, from: Square) -> Option<Piece> {
    game_state
        .piece_at(from)
        .filter(|piece| piece.belongs_to(game_state.active_color()))
}

/// Every `(from, candidate)` pair for the side to move.
pub fn all_candidate_moves(game_state: &GameState) -> Vec<(Square, CandidateMove)> {
    let mut all = Vec::with_capacity(64);
    let mut scratch = Vec::with_capacity(32);

    for (from, piece) in game_state.pieces(game_state.active_color()) {
        scratch.clear();
        generate_piece_moves(game_state, from, piece, &mut scratch);
        all.extend(scratch.iter().map(|&mv| (from, mv)));
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;

    fn sq(x: i32, y: i32) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn empty_square_is_distinct_from_no_candidates() {
        let mut game = GameState::new_game();
        assert_eq!(PseudoLegalMoveGenerator.candidate_moves(&game, sq(4, 4)), None);

        // Rook boxed in by its own army: a movable piece with nothing to do.
        assert_eq!(
            PseudoLegalMoveGenerator.candidate_moves(&game, sq(0, 7)),
            Some(Vec::new())
        );

        game.set_active_color(Color::Black);
        assert_eq!(PseudoLegalMoveGenerator.candidate_moves(&game, sq(0, 7)), None);
    }

    #[test]
    fn out_of_turn_piece_has_no_moves() {
        let game = GameState::new_game();
        assert_eq!(PseudoLegalMoveGenerator.candidate_moves(&game, sq(1, 0)), None);
        assert_eq!(movable_piece(&game, sq(1, 0)), None);
        assert!(movable_piece(&game, sq(1, 7)).is_some());
    }

    #[test]
    fn raw_coordinates_are_validated() {
        let game = GameState::new_game();
        for (x, y) in [(-1, 0), (0, -1), (8, 3), (3, 8), (i32::MAX, i32::MIN)] {
            assert_eq!(
                PseudoLegalMoveGenerator.candidate_moves_at(&game, x, y),
                Err(ChessErrors::InvalidSquare { x, y })
            );
        }
        let moves = PseudoLegalMoveGenerator
            .candidate_moves_at(&game, 6, 7)
            .expect("on-board query should succeed");
        assert_eq!(moves.map(|m| m.len()), Some(2));
    }

    #[test]
    fn starting_side_has_twenty_candidates() {
        let game = GameState::new_game();
        assert_eq!(all_candidate_moves(&game).len(), 20);
    }
}
