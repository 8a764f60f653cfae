//! Pawn candidate generation.
//!
//! Single push, double push from the start rank, diagonal captures and
//! en passant. Promotion is not generated: a pawn on the last rank simply has
//! no forward moves.

use crate::game_state::chess_rules::{en_passant_capture_rank, pawn_start_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{classify_landing, Landing};
use crate::moves::move_descriptions::CandidateMove;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    mover: Color,
    out: &mut Vec<CandidateMove>,
) {
    let forward = mover.forward();

    if let Some(one_step) = from.offset(0, forward) {
        if game_state.is_empty(one_step) {
            out.push(CandidateMove::quiet(one_step));

            // Double push needs the single-step square clear as well.
            if from.y() == pawn_start_rank(mover) {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if game_state.is_empty(two_step) {
                        out.push(CandidateMove::quiet(two_step));
                    }
                }
            }
        }
    }

    let opponent_files = game_state.en_passant_files(mover.opposite());
    let on_en_passant_rank = from.y() == en_passant_capture_rank(mover);

    for file_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(file_delta, forward) else {
            continue;
        };

        match classify_landing(game_state, to, mover) {
            Landing::Opponent => out.push(CandidateMove::capture(to)),
            Landing::Empty
                if on_en_passant_rank
                    && opponent_files.contains(to.x())
                    && opponent_pawn_beside(game_state, from, to, mover) =>
            {
                out.push(CandidateMove::capture(to));
            }
            Landing::Empty | Landing::Own => {}
        }
    }
}

/// True when moving `pawn` from `from` to `to` takes a pawn en passant in the
/// current position. Mirrors the generation condition above.
pub fn is_en_passant_capture(
    game_state: &GameState,
    pawn: Piece,
    from: Square,
    candidate: CandidateMove,
) -> bool {
    pawn.kind == PieceKind::Pawn
        && candidate.is_capture
        && from.y() == en_passant_capture_rank(pawn.color)
        && candidate.to.x() != from.x()
        && game_state.is_empty(candidate.to)
        && game_state
            .en_passant_files(pawn.color.opposite())
            .contains(candidate.to.x())
        && opponent_pawn_beside(game_state, from, candidate.to, pawn.color)
}

/// The square a pawn taken en passant stands on: the mover's rank, the
/// destination file. Must hold an opposing pawn.
fn opponent_pawn_beside(game_state: &GameState, from: Square, to: Square, mover: Color) -> bool {
    Square::new(to.x() as i32, from.y() as i32)
        .and_then(|beside| game_state.piece_at(beside))
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.is_opponent_of(mover))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: i32, y: i32) -> Square {
        Square::new(x, y).unwrap()
    }

    fn pawn_moves(game: &GameState, from: Square, mover: Color) -> Vec<CandidateMove> {
        let mut out = Vec::new();
        generate_pawn_moves(game, from, mover, &mut out);
        out
    }

    #[test]
    fn blocked_single_step_also_blocks_double_push() {
        let mut game = GameState::new_game();
        game.place_piece(sq(2, 5), Piece::black(PieceKind::Knight));

        let moves = pawn_moves(&game, sq(2, 6), Color::White);
        assert!(moves.is_empty());
    }

    #[test]
    fn double_push_blocked_on_second_square() {
        let mut game = GameState::new_game();
        game.place_piece(sq(5, 3), Piece::white(PieceKind::Knight));

        let moves = pawn_moves(&game, sq(5, 1), Color::Black);
        assert_eq!(moves, vec![CandidateMove::quiet(sq(5, 2))]);
    }

    #[test]
    fn diagonal_captures_only_hit_opponents() {
        let mut game = GameState::new_empty();
        game.place_piece(sq(3, 4), Piece::white(PieceKind::Pawn));
        game.place_piece(sq(2, 3), Piece::black(PieceKind::Rook));
        game.place_piece(sq(4, 3), Piece::white(PieceKind::Rook));

        let moves = pawn_moves(&game, sq(3, 4), Color::White);
        assert!(moves.contains(&CandidateMove::capture(sq(2, 3))));
        assert!(moves.contains(&CandidateMove::quiet(sq(3, 3))));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn edge_file_pawn_does_not_wrap() {
        let mut game = GameState::new_empty();
        game.place_piece(sq(7, 2), Piece::black(PieceKind::Pawn));
        game.place_piece(sq(0, 3), Piece::white(PieceKind::Queen));

        let moves = pawn_moves(&game, sq(7, 2), Color::Black);
        assert_eq!(moves, vec![CandidateMove::quiet(sq(7, 3))]);
    }

    #[test]
    fn en_passant_requires_capture_rank() {
        let mut game = GameState::new_empty();
        game.place_piece(sq(3, 4), Piece::white(PieceKind::Pawn));
        game.place_piece(sq(4, 4), Piece::black(PieceKind::Pawn));
        game.record_double_push(Color::Black, 4);

        let moves = pawn_moves(&game, sq(3, 4), Color::White);
        assert!(!moves.iter().any(|mv| mv.is_capture));

        game.remove_piece(sq(3, 4));
        game.remove_piece(sq(4, 4));
        game.place_piece(sq(3, 3), Piece::white(PieceKind::Pawn));
        game.place_piece(sq(4, 3), Piece::black(PieceKind::Pawn));
        let moves = pawn_moves(&game, sq(3, 3), Color::White);
        assert!(moves.contains(&CandidateMove::capture(sq(4, 2))));
    }

    #[test]
    fn en_passant_needs_opposing_pawn_beside() {
        let mut game = GameState::new_empty();
        game.place_piece(sq(3, 4), Piece::black(PieceKind::Pawn));
        game.record_double_push(Color::White, 4);

        // Nothing beside the pawn.
        let moves = pawn_moves(&game, sq(3, 4), Color::Black);
        assert!(!moves.contains(&CandidateMove::capture(sq(4, 5))));

        // Own piece beside the pawn.
        game.place_piece(sq(4, 4), Piece::black(PieceKind::Knight));
        let moves = pawn_moves(&game, sq(3, 4), Color::Black);
        assert!(!moves.contains(&CandidateMove::capture(sq(4, 5))));
        assert!(!is_en_passant_capture(
            &game,
            Piece::black(PieceKind::Pawn),
            sq(3, 4),
            CandidateMove::capture(sq(4, 5))
        ));

        // Opposing piece that is not a pawn.
        game.place_piece(sq(4, 4), Piece::white(PieceKind::Knight));
        let moves = pawn_moves(&game, sq(3, 4), Color::Black);
        assert!(!moves.contains(&CandidateMove::capture(sq(4, 5))));

        game.place_piece(sq(4, 4), Piece::white(PieceKind::Pawn));
        let moves = pawn_moves(&game, sq(3, 4), Color::Black);
        assert!(moves.contains(&CandidateMove::capture(sq(4, 5))));
    }
}
