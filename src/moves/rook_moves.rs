//! Rook step table.
//!
//! Rooks here move a single square orthogonally, not along full rays.

use crate::game_state::board_types::{Board, Position};

pub const ROOK_DELTAS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_targets(from: Position, board: &Board) -> Vec<Position> {
    board.targets_from(from, &ROOK_DELTAS)
}
