//! Static opponent rosters for each level.
//!
//! Roster order matters: the AI assigns roles by index, so entries are kept
//! exactly in the order listed. Levels past the table have an empty roster,
//! which the session reads as "all levels cleared".

use crate::game_state::board_types::Position;
use crate::game_state::piece_types::{AiPiece, PieceKind};

type RosterEntry = (PieceKind, Position);

const fn entry(kind: PieceKind, x: i32, y: i32) -> RosterEntry {
    (kind, Position::new(x, y))
}

const LEVEL_1: &[RosterEntry] = &[
    entry(PieceKind::Pawn, 1, 1),
    entry(PieceKind::Knight, 3, 1),
    entry(PieceKind::Rook, 6, 1),
];

const LEVEL_2: &[RosterEntry] = &[
    entry(PieceKind::Pawn, 1, 1),
    entry(PieceKind::Knight, 3, 1),
    entry(PieceKind::Rook, 6, 1),
    entry(PieceKind::Bishop, 4, 1),
];

const LEVEL_3: &[RosterEntry] = &[
    entry(PieceKind::Knight, 2, 1),
    entry(PieceKind::Bishop, 3, 1),
    entry(PieceKind::Rook, 5, 1),
    entry(PieceKind::Queen, 4, 1),
    entry(PieceKind::Pawn, 1, 2),
];

const LEVEL_4: &[RosterEntry] = &[
    entry(PieceKind::Queen, 4, 1),
    entry(PieceKind::Bishop, 3, 1),
    entry(PieceKind::Bishop, 5, 1),
    entry(PieceKind::Knight, 2, 1),
    entry(PieceKind::Knight, 6, 1),
    entry(PieceKind::Pawn, 4, 2),
];

const LEVEL_5: &[RosterEntry] = &[
    entry(PieceKind::Queen, 4, 1),
    entry(PieceKind::Rook, 1, 1),
    entry(PieceKind::Rook, 7, 1),
    entry(PieceKind::Bishop, 3, 1),
    entry(PieceKind::Bishop, 5, 1),
    entry(PieceKind::Knight, 2, 2),
    entry(PieceKind::Knight, 6, 2),
];

const LEVELS: [&[RosterEntry]; 5] = [LEVEL_1, LEVEL_2, LEVEL_3, LEVEL_4, LEVEL_5];

/// Highest level with a roster.
pub const MAX_LEVEL: u32 = LEVELS.len() as u32;

/// Fresh AI pieces for `level` (1-based). Empty past `MAX_LEVEL` or for 0.
pub fn level_roster(level: u32) -> Vec<AiPiece> {
    let Some(idx) = (level as usize).checked_sub(1) else {
        return Vec::new();
    };
    LEVELS
        .get(idx)
        .map(|roster| {
            roster
                .iter()
                .map(|&(kind, position)| AiPiece::new(kind, position))
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub number: u32,
}

impl Level {
    pub const fn new(number: u32) -> Self {
        Self { number }
    }

    pub fn roster(&self) -> Vec<AiPiece> {
        level_roster(self.number)
    }

    /// Difficulty rating shown to the player, capped at 5.
    pub fn difficulty(&self) -> u32 {
        self.number.min(5)
    }
}

#[cfg(test)]
mod tests {
    use super::{level_roster, Level, MAX_LEVEL};
    use crate::game_state::board_types::Position;
    use crate::game_state::piece_types::PieceKind;

    #[test]
    fn roster_sizes_grow_by_level() {
        let sizes: Vec<usize> = (1..=MAX_LEVEL).map(|l| level_roster(l).len()).collect();
        assert_eq!(sizes, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn level_two_extends_level_one_with_a_bishop() {
        let one = level_roster(1);
        let two = level_roster(2);
        assert_eq!(&two[..3], &one[..]);
        assert_eq!(two[3].kind, PieceKind::Bishop);
        assert_eq!(two[3].position, Position::new(4, 1));
    }

    #[test]
    fn out_of_range_levels_are_empty() {
        assert!(level_roster(0).is_empty());
        assert!(level_roster(MAX_LEVEL + 1).is_empty());
    }

    #[test]
    fn rosters_have_unique_squares() {
        for level in 1..=MAX_LEVEL {
            let roster = level_roster(level);
            for (i, a) in roster.iter().enumerate() {
                for b in &roster[i + 1..] {
                    assert_ne!(a.position, b.position, "level {level}");
                }
            }
        }
    }

    #[test]
    fn difficulty_caps_at_five() {
        assert_eq!(Level::new(3).difficulty(), 3);
        assert_eq!(Level::new(9).difficulty(), 5);
    }
}
