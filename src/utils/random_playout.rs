//! Seeded random self-play.
//!
//! Drives a game using only candidate queries and move application, picking
//! uniformly among every `(from, candidate)` pair of the side to move. Used to
//! exercise the engine over long sequences; the same seed always replays the
//! same game.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::chess_errors::ChessResult;
use crate::game_state::rules_config::RulesConfig;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use crate::moves::move_descriptions::CandidateMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    MaxPlies,
    /// The side to move had no candidate left.
    NoCandidates(Color),
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
    /// Skip candidates that would capture a king. The engine never checks for
    /// check, so without this a king can be taken and the game degenerates.
    pub avoid_king_capture: bool,
    pub rules: RulesConfig,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
            avoid_king_capture: true,
            rules: RulesConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub plies: u16,
    pub outcome: PlayoutOutcome,
    pub captures: usize,
    pub en_passant_captures: usize,
    pub final_state: GameState,
}

pub fn run_random_playout(config: &PlayoutConfig) -> ChessResult<PlayoutReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = GameState::new_game_with_config(config.rules);
    let generator = PseudoLegalMoveGenerator;

    let mut captures = 0usize;
    let mut en_passant_captures = 0usize;
    let mut outcome = PlayoutOutcome::MaxPlies;

    while game.ply() < config.max_plies {
        let choices = playable_moves(&generator, &game, config.avoid_king_capture);
        let Some(&(from, candidate)) = choices.choose(&mut rng) else {
            outcome = PlayoutOutcome::NoCandidates(game.active_color());
            break;
        };

        let result = apply_move(&mut game, from, candidate)?;
        if result.is_capture() {
            captures += 1;
        }
        if result.en_passant {
            en_passant_captures += 1;
            debug!(ply = game.ply(), %from, to = %candidate.to, "en passant in playout");
        }
    }

    info!(
        seed = config.seed,
        plies = game.ply(),
        ?outcome,
        captures,
        en_passant_captures,
        "random playout finished"
    );

    Ok(PlayoutReport {
        plies: game.ply(),
        outcome,
        captures,
        en_passant_captures,
        final_state: game,
    })
}

fn playable_moves<G: MoveGenerator>(
    generator: &G,
    game: &GameState,
    avoid_king_capture: bool,
) -> Vec<(Square, CandidateMove)> {
    let mut out = Vec::with_capacity(64);

    for (from, _) in game.pieces(game.active_color()) {
        let Some(candidates) = generator.candidate_moves(game, from) else {
            continue;
        };
        out.extend(
            candidates
                .into_iter()
                .filter(|mv| {
                    !(avoid_king_capture
                        && game
                            .piece_at(mv.to)
                            .is_some_and(|piece| piece.kind == PieceKind::King))
                })
                .map(|mv| (from, mv)),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_same_game() {
        let config = PlayoutConfig {
            max_plies: 60,
            seed: 7,
            ..PlayoutConfig::default()
        };
        let first = run_random_playout(&config).expect("playout should run");
        let second = run_random_playout(&config).expect("playout should run");

        assert_eq!(first.plies, second.plies);
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.final_state, second.final_state);
    }

    #[test]
    fn kings_survive_when_king_captures_are_avoided() {
        for seed in 0..5 {
            let config = PlayoutConfig {
                max_plies: 150,
                seed,
                ..PlayoutConfig::default()
            };
            let report = run_random_playout(&config).expect("playout should run");
            assert!(report.final_state.king_square(Color::White).is_some());
            assert!(report.final_state.king_square(Color::Black).is_some());
            assert!(report.plies <= 150);
        }
    }
}
