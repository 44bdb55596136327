//! King step table, used for the player piece.

use crate::game_state::board_types::{Board, Position};

pub const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(from: Position, board: &Board) -> Vec<Position> {
    board.targets_from(from, &KING_DELTAS)
}
