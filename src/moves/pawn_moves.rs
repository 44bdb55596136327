//! Pawn step table.
//!
//! AI pawns advance towards the player's home rank (increasing `y`): straight
//! ahead or one of the two forward diagonals. There is no capture-only
//! diagonal and no double step.

use crate::game_state::board_types::{Board, Position};

pub const PAWN_DELTAS: [(i32, i32); 3] = [(0, 1), (1, 1), (-1, 1)];

#[inline]
pub fn pawn_targets(from: Position, board: &Board) -> Vec<Position> {
    board.targets_from(from, &PAWN_DELTAS)
}
