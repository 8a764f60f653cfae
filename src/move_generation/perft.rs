//! Pseudo-legal perft.
//!
//! Counts the leaves of the candidate tree, applying every candidate of every
//! piece of the side to move. No self-check filtering is done, so counts only
//! match published legal perft figures at depths where no king can be exposed.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move_cloned;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::CandidateMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    let side = game_state.active_color();

    for (from, _) in game_state.pieces(side) {
        let Some(candidates) = generator.candidate_moves(game_state, from) else {
            continue;
        };

        for candidate in candidates {
            let (next, result) = apply_move_cloned(game_state, from, candidate)?;

            if depth == 1 {
                total.nodes += 1;
                if result.is_capture() {
                    total.captures += 1;
                }
                if result.en_passant {
                    total.en_passant += 1;
                }
            } else {
                total.merge(perft(generator, &next, depth - 1)?);
            }
        }
    }

    Ok(total)
}

/// Node count below each root candidate, keyed by origin square.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<Vec<(Square, CandidateMove, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    let side = game_state.active_color();
    for (from, _) in game_state.pieces(side) {
        let Some(candidates) = generator.candidate_moves(game_state, from) else {
            continue;
        };
        for candidate in candidates {
            let (next, _) = apply_move_cloned(game_state, from, candidate)?;
            let counts = perft(generator, &next, depth - 1)?;
            out.push((from, candidate, counts.nodes));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    #[test]
    fn startpos_shallow_counts_match_reference() {
        let game = GameState::new_game();
        let expected = [1usize, 20, 400, 8902];
        for (depth, nodes) in expected.iter().enumerate() {
            let counts = perft(&PseudoLegalMoveGenerator, &game, depth as u8)
                .expect("perft should run");
            assert_eq!(counts.nodes, *nodes, "depth {depth}");
        }
    }

    #[test]
    fn startpos_depth_three_captures() {
        let game = GameState::new_game();
        let counts = perft(&PseudoLegalMoveGenerator, &game, 3).expect("perft should run");
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.en_passant, 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divided = perft_divide(&PseudoLegalMoveGenerator, &game, 2).expect("divide should run");
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, _, n)| n).sum::<usize>(), 400);
    }

    #[test]
    fn en_passant_is_counted() {
        let mut game = GameState::new_empty();
        let sq = |x, y| Square::new(x, y).unwrap();
        game.place_piece(sq(3, 3), Piece::white(PieceKind::Pawn));
        game.place_piece(sq(4, 3), Piece::black(PieceKind::Pawn));
        game.record_double_push(Color::Black, 4);

        let counts = perft(&PseudoLegalMoveGenerator, &game, 1).expect("perft should run");
        assert_eq!(counts.nodes, 2);
        assert_eq!(counts.captures, 1);
        assert_eq!(counts.en_passant, 1);
    }
}
