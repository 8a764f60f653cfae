//! Rule variations a game can be created with.

/// How long a double pawn push keeps its en passant right open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnPassantWindow {
    /// Rights expire after the opponent's next ply (standard chess).
    #[default]
    SinglePly,
    /// Rights are never cleared once recorded.
    Persistent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulesConfig {
    pub en_passant_window: EnPassantWindow,
}

impl RulesConfig {
    pub fn with_en_passant_window(mut self, window: EnPassantWindow) -> Self {
        self.en_passant_window = window;
        self
    }
}
