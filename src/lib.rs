//! Crate root module declarations for the sign_chess rules engine.
//!
//! The engine keeps board state for one game, answers "where can the piece on
//! this square go" with pseudo-legal candidate moves, and applies a chosen
//! candidate, including en passant captures and double-push bookkeeping.
//! Check detection, castling and promotion are not evaluated.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod rules_config;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod movement_rules;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_shared;
    pub mod legal_moves_pawn;
    pub mod move_generator;
    pub mod perft;
    pub mod piece_catalog;
}

pub mod utils {
    pub mod random_playout;
    pub mod render_game_state;
}
