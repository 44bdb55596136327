//! The human-controlled piece and its one-shot abilities.
//!
//! Abilities are held in acquisition order and may repeat (two Shields is a
//! legal loadout). Using one removes exactly one instance. Hit points are
//! kept inside `[0, max_hp]` by every mutator here.

use std::fmt;

use crate::game_state::board_types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    ExtraMove,
    Shield,
    Teleport,
    Heal,
}

impl Ability {
    pub const ALL: [Ability; 4] = [
        Ability::ExtraMove,
        Ability::Shield,
        Ability::Teleport,
        Ability::Heal,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Ability::ExtraMove => "Double Move",
            Ability::Shield => "Shield",
            Ability::Teleport => "Teleport",
            Ability::Heal => "Heal",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub position: Position,
    pub hp: i32,
    pub max_hp: i32,
    pub abilities: Vec<Ability>,
    pub shield_active: bool,
    pub moves_remaining: u32,
}

impl Player {
    pub fn new(position: Position, hp: i32, max_hp: i32, abilities: Vec<Ability>) -> Self {
        Self {
            position,
            hp: hp.clamp(0, max_hp),
            max_hp,
            abilities,
            shield_active: false,
            moves_remaining: 1,
        }
    }

    #[inline]
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    pub fn add_ability(&mut self, ability: Ability) {
        self.abilities.push(ability);
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).clamp(0, self.max_hp);
    }

    /// Take one hit. Returns the remaining hit points.
    pub fn take_hit(&mut self) -> i32 {
        self.hp = (self.hp - 1).clamp(0, self.max_hp);
        self.hp
    }

    /// Consume one instance of `ability` and apply its effect.
    ///
    /// Returns `false` without touching any state when the ability is not
    /// held. Teleport has no standing effect here; the turn controller moves
    /// the player itself.
    pub fn use_ability(&mut self, ability: Ability) -> bool {
        let Some(idx) = self.abilities.iter().position(|&a| a == ability) else {
            return false;
        };
        self.abilities.remove(idx);

        match ability {
            Ability::ExtraMove => self.moves_remaining = 2,
            Ability::Shield => self.shield_active = true,
            Ability::Heal => self.heal(1),
            Ability::Teleport => {}
        }
        true
    }
}
