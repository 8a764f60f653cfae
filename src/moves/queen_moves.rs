//! Queen ray directions: the union of the bishop and rook rays.

use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = generate_queen_directions();

const fn generate_queen_directions() -> [(i8, i8); 8] {
    let mut table = [(0i8, 0i8); 8];
    let mut i = 0usize;

    while i < 4 {
        table[i] = BISHOP_DIRECTIONS[i];
        table[i + 4] = ROOK_DIRECTIONS[i];
        i += 1;
    }

    table
}
