//! Grid geometry shared by every other subsystem.
//!
//! Squares are addressed as `(x, y)` with `x` growing to the right and `y`
//! growing towards the player's home rank. The board is square; its side
//! length is carried by `Board` rather than hard-coded so alternate sizes can
//! be configured.

use std::fmt;

use crate::game_state::game_rules::BOARD_SIZE;

/// A grid square. Plain value type; equality is coordinate equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance, used by the AI scoring formulas.
    #[inline]
    pub fn distance_to(self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub size: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self { size: BOARD_SIZE }
    }
}

impl Board {
    #[inline]
    pub const fn new(size: i32) -> Self {
        Self { size }
    }

    #[inline]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    /// True when the square sits on the first or last file or rank.
    #[inline]
    pub const fn is_edge(&self, pos: Position) -> bool {
        let last = self.size - 1;
        pos.x == 0 || pos.x == last || pos.y == 0 || pos.y == last
    }

    /// Apply each delta to `from`, keeping only the squares that stay on the
    /// board. Output order follows the delta table.
    pub fn targets_from(&self, from: Position, deltas: &[(i32, i32)]) -> Vec<Position> {
        deltas
            .iter()
            .map(|&(dx, dy)| from.offset(dx, dy))
            .filter(|&pos| self.contains(pos))
            .collect()
    }
}
