//! Board state for a single game.
//!
//! `GameState` is the central model for the engine: an 8x8 grid of optional
//! pieces indexed `[y][x]`, the side to move, and the per-color en passant file
//! sets that pawn generation and move application consult. Piece lists are
//! never stored; they are derived from the grid on demand.

use crate::game_state::chess_rules::{BOARD_SIZE, STARTING_POSITION_CODES};
use crate::game_state::chess_types::*;
use crate::game_state::rules_config::RulesConfig;

pub type Grid = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Grid,

    // --- Side and state flags ---
    active_color: Color,
    // [color] -> files where that color just double-pushed.
    en_passant_files: [EnPassantFiles; 2],

    // --- Bookkeeping ---
    material_balance: i32,
    ply: u16,

    config: RulesConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_SIZE]; BOARD_SIZE],
            active_color: Color::White,
            en_passant_files: [EnPassantFiles::default(); 2],
            material_balance: 0,
            ply: 0,
            config: RulesConfig::default(),
        }
    }
}

impl GameState {
    /// Empty board, White to move. Used to set up arbitrary positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::new_game_with_config(RulesConfig::default())
    }

    pub fn new_game_with_config(config: RulesConfig) -> Self {
        let mut state = Self {
            config,
            ..Self::default()
        };
        for (y, row) in STARTING_POSITION_CODES.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                state.board[y][x] = Piece::from_code(code);
            }
        }
        state
    }

    #[inline]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.y()][square.x()]
    }

    /// Places `piece` on `square`, returning whatever stood there before.
    /// Does not enforce the one-king-per-color invariant.
    pub fn place_piece(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.board[square.y()][square.x()].replace(piece)
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.board[square.y()][square.x()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    /// Files on which `color` double-pushed a pawn within the current window.
    #[inline]
    pub fn en_passant_files(&self, color: Color) -> EnPassantFiles {
        self.en_passant_files[color.index()]
    }

    pub fn record_double_push(&mut self, color: Color, file: usize) {
        self.en_passant_files[color.index()].insert(file);
    }

    pub(crate) fn clear_en_passant_files(&mut self) {
        for files in &mut self.en_passant_files {
            files.clear();
        }
    }

    /// Running material difference from captures: positive favours White.
    #[inline]
    pub fn material_balance(&self) -> i32 {
        self.material_balance
    }

    pub(crate) fn add_material(&mut self, delta: i32) {
        self.material_balance += delta;
    }

    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    pub(crate) fn finish_ply(&mut self) {
        self.active_color = self.active_color.opposite();
        self.ply = self.ply.saturating_add(1);
    }

    /// Copy of the grid for rendering, indexed `[y][x]`.
    #[inline]
    pub fn board_snapshot(&self) -> Grid {
        self.board
    }

    /// The grid in signed piece codes (`0` empty, positive White), indexed `[y][x]`.
    pub fn board_codes(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut codes = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for (code_row, row) in codes.iter_mut().zip(self.board.iter()) {
            for (code, cell) in code_row.iter_mut().zip(row.iter()) {
                *code = cell.map_or(0, Piece::code);
            }
        }
        codes
    }

    /// Pieces of `color` with their squares, scanned row by row.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.belongs_to(color))
                .map(|piece| (square, piece))
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }
}
