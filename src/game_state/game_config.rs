//! Session configuration.
//!
//! Every field defaults to the standard rules in `game_rules`, so callers
//! override only what they need:
//!
//! ```
//! use moodeng_chess::game_state::game_config::GameConfig;
//!
//! let config = GameConfig {
//!     rng_seed: Some(7),
//!     ..GameConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use crate::game_errors::{GameErrors, GameResult};
use crate::game_state::board_types::{Board, Position};
use crate::game_state::game_rules::{
    BOARD_SIZE, CAPTURE_REWARD, LEVEL_REWARD, MAX_HP, PLAYER_SPAWN, STARTING_ABILITIES,
    STARTING_HP,
};
use crate::game_state::player::Ability;
use crate::search::move_scoring::RolePolicy;
use crate::tables::level_catalog::{level_roster, MAX_LEVEL};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board_size: i32,
    pub spawn: Position,
    pub starting_hp: i32,
    pub max_hp: i32,
    pub starting_abilities: Vec<Ability>,
    pub capture_reward: u32,
    pub level_reward: u32,
    pub role_policy: RolePolicy,
    /// Fixed seed for ability grants and random engines. `None` draws one
    /// from the thread RNG.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            spawn: PLAYER_SPAWN,
            starting_hp: STARTING_HP,
            max_hp: MAX_HP,
            starting_abilities: STARTING_ABILITIES.to_vec(),
            capture_reward: CAPTURE_REWARD,
            level_reward: LEVEL_REWARD,
            role_policy: RolePolicy::default(),
            rng_seed: None,
        }
    }
}

impl GameConfig {
    #[inline]
    pub fn board(&self) -> Board {
        Board::new(self.board_size)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.board_size < 1 {
            return Err(GameErrors::InvalidBoardSize(self.board_size));
        }
        let board = self.board();
        if !board.contains(self.spawn) {
            return Err(GameErrors::SpawnOutOfBounds {
                spawn: self.spawn,
                board_size: self.board_size,
            });
        }
        for level in 1..=MAX_LEVEL {
            for piece in level_roster(level) {
                if !board.contains(piece.position) {
                    return Err(GameErrors::RosterOutOfBounds {
                        level,
                        position: piece.position,
                    });
                }
                if piece.position == self.spawn {
                    return Err(GameErrors::RosterBlocksSpawn {
                        level,
                        position: piece.position,
                    });
                }
            }
        }
        if self.starting_hp < 1 || self.starting_hp > self.max_hp {
            return Err(GameErrors::InvalidHitPoints {
                starting: self.starting_hp,
                max: self.max_hp,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;
    use crate::game_errors::GameErrors;
    use crate::game_state::board_types::Position;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn spawn_must_fit_the_board() {
        let config = GameConfig {
            board_size: 4,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameErrors::SpawnOutOfBounds {
                spawn: Position::new(4, 7),
                board_size: 4,
            })
        );
    }

    #[test]
    fn small_board_must_still_hold_every_roster() {
        let config = GameConfig {
            board_size: 6,
            spawn: Position::new(4, 5),
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameErrors::RosterOutOfBounds {
                level: 1,
                position: Position::new(6, 1),
            })
        );
    }

    #[test]
    fn spawn_cannot_share_a_roster_square() {
        let config = GameConfig {
            spawn: Position::new(4, 1),
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameErrors::RosterBlocksSpawn {
                level: 2,
                position: Position::new(4, 1),
            })
        );
    }

    #[test]
    fn larger_board_is_accepted() {
        let config = GameConfig {
            board_size: 10,
            spawn: Position::new(4, 9),
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn starting_hp_cannot_exceed_max() {
        let config = GameConfig {
            starting_hp: 6,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameErrors::InvalidHitPoints {
                starting: 6,
                max: 5
            })
        );
    }
}
