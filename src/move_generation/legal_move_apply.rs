//! Move application.
//!
//! Applies a candidate previously handed out by `candidate_moves` for the same
//! position. The candidate is checked against a fresh generation first, so an
//! out-of-date or fabricated candidate is rejected before any state changes.

use tracing::{debug, trace, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::material_value;
use crate::game_state::rules_config::EnPassantWindow;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_pawn::is_en_passant_capture;
use crate::move_generation::piece_catalog::piece_moves;
use crate::moves::move_descriptions::{CandidateMove, MoveResult};

pub fn apply_move(
    game_state: &mut GameState,
    from: Square,
    candidate: CandidateMove,
) -> ChessResult<MoveResult> {
    let moved = validate_move(game_state, from, candidate).inspect_err(|err| {
        warn!(%from, to = %candidate.to, error = %err, "rejected move");
    })?;
    let to = candidate.to;
    let mover = moved.color;

    let en_passant = is_en_passant_capture(game_state, moved, from, candidate);

    game_state.remove_piece(from);

    let captured = if en_passant {
        // The captured pawn sits beside the mover, on the destination file.
        Square::new(to.x() as i32, from.y() as i32)
            .and_then(|behind| game_state.remove_piece(behind))
    } else if candidate.is_capture {
        game_state.remove_piece(to)
    } else {
        None
    };

    game_state.place_piece(to, moved);

    if let Some(piece) = captured {
        let value = material_value(piece.kind);
        game_state.add_material(match piece.color {
            Color::Black => value,
            Color::White => -value,
        });
    }

    if game_state.config().en_passant_window == EnPassantWindow::SinglePly {
        trace!("clearing en passant files");
        game_state.clear_en_passant_files();
    }
    if moved.kind == PieceKind::Pawn && from.y().abs_diff(to.y()) == 2 {
        trace!(color = %mover, file = to.x(), "recording double push");
        game_state.record_double_push(mover, to.x());
    }

    game_state.finish_ply();

    debug!(
        ply = game_state.ply(),
        %from,
        %to,
        piece = ?moved.kind,
        captured = ?captured.map(|piece| piece.kind),
        en_passant,
        "applied move"
    );

    Ok(MoveResult {
        moved,
        captured,
        en_passant,
        check: None,
        promotion: None,
    })
}

/// Applies the move to a copy, leaving `game_state` untouched.
pub fn apply_move_cloned(
    game_state: &GameState,
    from: Square,
    candidate: CandidateMove,
) -> ChessResult<(GameState, MoveResult)> {
    let mut next = game_state.clone();
    let result = apply_move(&mut next, from, candidate)?;
    Ok((next, result))
}

fn validate_move(
    game_state: &GameState,
    from: Square,
    candidate: CandidateMove,
) -> ChessResult<Piece> {
    let piece = game_state
        .piece_at(from)
        .ok_or(ChessErrors::EmptySquare(from))?;

    let active = game_state.active_color();
    if !piece.belongs_to(active) {
        return Err(ChessErrors::WrongTurn {
            square: from,
            piece,
            active,
        });
    }

    if !piece_moves(game_state, from, piece).contains(&candidate) {
        return Err(ChessErrors::StaleCandidate {
            from,
            to: candidate.to,
            is_capture: candidate.is_capture,
        });
    }

    Ok(piece)
}
