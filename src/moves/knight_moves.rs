use crate::game_state::board_types::{Board, Position};

pub const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

#[inline]
pub fn knight_targets(from: Position, board: &Board) -> Vec<Position> {
    board.targets_from(from, &KNIGHT_DELTAS)
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::board_types::{Board, Position};

    #[test]
    fn knight_from_center_has_eight_targets() {
        assert_eq!(knight_targets(Position::new(3, 3), &Board::default()).len(), 8);
    }

    #[test]
    fn knight_from_corner_has_two_targets() {
        let targets = knight_targets(Position::new(0, 0), &Board::default());
        assert_eq!(targets, vec![Position::new(2, 1), Position::new(1, 2)]);
    }
}
