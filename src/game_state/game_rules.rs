//! Canonical rule constants.
//!
//! Defaults for a fresh session. `GameConfig` copies these and may override
//! them; nothing else should hard-code the literals.

use crate::game_state::board_types::Position;
use crate::game_state::player::Ability;

/// Side length of the standard board.
pub const BOARD_SIZE: i32 = 8;

/// Square the player starts on, returns to after a hit, and is placed on at
/// each new level.
pub const PLAYER_SPAWN: Position = Position::new(4, 7);

pub const STARTING_HP: i32 = 3;
pub const MAX_HP: i32 = 5;

pub const STARTING_ABILITIES: &[Ability] = &[Ability::Shield];

/// Score awarded for each AI piece the player captures.
pub const CAPTURE_REWARD: u32 = 100;

/// Score awarded on entering a new level.
pub const LEVEL_REWARD: u32 = 500;

/// How many narration lines the session keeps for renderers.
pub const EVENT_LOG_CAPACITY: usize = 64;

pub const VICTORY_MESSAGE: &str = "Victory! All levels completed!";
pub const DEFEAT_MESSAGE: &str = "Game Over! Click Restart to try again";
