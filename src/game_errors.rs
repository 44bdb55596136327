//! Errors raised at the edges of the game core.
//!
//! Turn resolution itself never fails: bad clicks and unusable abilities are
//! absorbed as no-ops. `GameErrors` only covers the places where a caller
//! hands the core something it cannot work with at all, namely session
//! configuration and the pixel-to-grid mapping used by presentation layers.

use std::error::Error;
use std::fmt;

use crate::game_state::board_types::Position;

pub type GameResult<T> = Result<T, GameErrors>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameErrors {
    /// Board side length must be at least one square.
    InvalidBoardSize(i32),
    /// The respawn square must lie on the configured board.
    SpawnOutOfBounds { spawn: Position, board_size: i32 },
    /// A catalog roster square does not fit on the configured board.
    RosterOutOfBounds { level: u32, position: Position },
    /// A catalog roster square is the player's spawn square.
    RosterBlocksSpawn { level: u32, position: Position },
    /// Starting hit points must satisfy `1 <= starting <= max`.
    InvalidHitPoints { starting: i32, max: i32 },
    /// Pixel mapping needs a positive cell size.
    InvalidCellSize(i32),
    /// Pixel coordinates handed in by a renderer were negative.
    NegativePixel { px: i32, py: i32 },
}

impl fmt::Display for GameErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameErrors::InvalidBoardSize(size) => write!(f, "invalid board size: {size}"),
            GameErrors::SpawnOutOfBounds { spawn, board_size } => write!(
                f,
                "spawn square {spawn} is outside a {board_size}x{board_size} board"
            ),
            GameErrors::RosterOutOfBounds { level, position } => {
                write!(f, "level {level} places a piece off the board at {position}")
            }
            GameErrors::RosterBlocksSpawn { level, position } => {
                write!(f, "level {level} places a piece on the spawn square {position}")
            }
            GameErrors::InvalidHitPoints { starting, max } => {
                write!(f, "invalid hit points: starting {starting}, max {max}")
            }
            GameErrors::InvalidCellSize(size) => write!(f, "invalid cell size: {size}"),
            GameErrors::NegativePixel { px, py } => {
                write!(f, "negative pixel coordinate: ({px}, {py})")
            }
        }
    }
}

impl Error for GameErrors {}

#[cfg(test)]
mod tests {
    use super::GameErrors;
    use crate::game_state::board_types::Position;

    #[test]
    fn spawn_error_mentions_square_and_board() {
        let err = GameErrors::SpawnOutOfBounds {
            spawn: Position::new(9, 1),
            board_size: 8,
        };
        assert_eq!(err.to_string(), "spawn square (9, 1) is outside a 8x8 board");
    }
}
