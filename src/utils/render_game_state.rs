//! Terminal-oriented Unicode board renderer.
//!
//! Produces a human-readable board for debugging, tests and diagnostics. Rows
//! are printed in grid order, so Black's back rank (`y == 0`) is at the top.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn render_game_state(game_state: &GameState) -> String {
    let snapshot = game_state.board_snapshot();
    let mut out = String::new();

    out.push_str(&column_labels());
    out.push('\n');

    for (y, row) in snapshot.iter().enumerate() {
        out.push(char::from(b'0' + y as u8));
        out.push(' ');

        for (x, cell) in row.iter().enumerate() {
            out.push(cell.map_or('·', piece_to_unicode));
            if x < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + y as u8));
        out.push('\n');
    }

    out.push_str(&column_labels());
    out.push('\n');
    out.push_str(&format!("{} to move", game_state.active_color()));

    out
}

fn column_labels() -> String {
    let labels: Vec<String> = (0..BOARD_SIZE).map(|x| x.to_string()).collect();
    format!("  {}", labels.join(" "))
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
