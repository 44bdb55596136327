//! The single owned game session.
//!
//! `GameSession` aggregates everything that changes during play: the current
//! level, the player, the AI roster, the selection state of the current turn,
//! score and the terminal flags. It is owned by whoever drives the game and
//! mutated only through its methods; there is no global state. Turn
//! resolution lives in `turn_controller`, this module covers setup, level
//! progression and ability selection.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_role_greedy::RoleGreedyEngine;
use crate::engines::engine_trait::AiEngine;
use crate::game_errors::GameResult;
use crate::game_state::board_types::{Board, Position};
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_rules::{DEFEAT_MESSAGE, EVENT_LOG_CAPACITY, VICTORY_MESSAGE};
use crate::game_state::piece_types::AiPiece;
use crate::game_state::player::{Ability, Player};
use crate::tables::level_catalog::{Level, MAX_LEVEL};

pub struct GameSession {
    pub config: GameConfig,
    pub board: Board,
    pub level: Level,
    pub player: Player,
    pub ai_pieces: Vec<AiPiece>,

    // --- Turn selection state ---
    pub selected: bool,
    pub valid_moves: Vec<Position>,
    pub selected_ability: Option<Ability>,

    pub score: u32,
    pub game_over: bool,
    pub victory: bool,
    pub level_complete: bool,

    pub event_log: VecDeque<String>,
    pub(crate) turn_lines: Vec<String>,
    pub(crate) rng: StdRng,
    pub(crate) engine: Box<dyn AiEngine>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Session with the standard rules and the role-greedy opponent.
    pub fn new() -> Self {
        Self::build(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Swap the opponent. The session is reset so the engine starts clean.
    pub fn with_engine(mut self, engine: Box<dyn AiEngine>) -> Self {
        self.engine = engine;
        self.reset();
        self
    }

    fn build(config: GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let level = Level::new(1);

        Self {
            board: config.board(),
            level,
            player: Self::fresh_player(&config),
            ai_pieces: level.roster(),
            selected: false,
            valid_moves: Vec::new(),
            selected_ability: None,
            score: 0,
            game_over: false,
            victory: false,
            level_complete: false,
            event_log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
            turn_lines: Vec::new(),
            rng,
            engine: Box::new(RoleGreedyEngine::new(config.role_policy)),
            config,
        }
    }

    fn fresh_player(config: &GameConfig) -> Player {
        Player::new(
            config.spawn,
            config.starting_hp,
            config.max_hp,
            config.starting_abilities.clone(),
        )
    }

    /// Throw away the current game and start again from level 1.
    pub fn reset(&mut self) {
        self.level = Level::new(1);
        self.player = Self::fresh_player(&self.config);
        self.ai_pieces = self.level.roster();
        self.clear_selection();
        self.selected_ability = None;
        self.score = 0;
        self.game_over = false;
        self.victory = false;
        self.level_complete = false;
        self.event_log.clear();
        self.engine.new_game();
        self.note(format!("new game, level 1 vs {}", self.engine.name()));
    }

    #[inline]
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Board and ability input is refused once the game has ended or while a
    /// level is being wrapped up.
    #[inline]
    pub fn accepts_input(&self) -> bool {
        !self.game_over && !self.level_complete
    }

    pub fn message(&self) -> Option<&'static str> {
        match (self.game_over, self.victory) {
            (true, true) => Some(VICTORY_MESSAGE),
            (true, false) => Some(DEFEAT_MESSAGE),
            _ => None,
        }
    }

    /// Toggle `ability` as the armed ability for the next move.
    ///
    /// Selecting the already armed ability disarms it without using it. Heal
    /// has no move to wait for and is applied on the spot. Returns `false`
    /// when the ability is not held or input is locked.
    pub fn select_ability(&mut self, ability: Ability) -> bool {
        if !self.accepts_input() {
            return false;
        }
        if self.selected_ability == Some(ability) {
            self.selected_ability = None;
            self.note(format!("{ability} deselected"));
            return true;
        }
        if !self.player.has_ability(ability) {
            return false;
        }

        if ability == Ability::Heal {
            self.player.use_ability(Ability::Heal);
            self.note(format!("healed, hp {}", self.player.hp));
        } else {
            self.selected_ability = Some(ability);
            self.note(format!("{ability} selected"));
        }
        true
    }

    /// Toggle the ability shown in slot `slot` of the player's list.
    pub fn select_ability_slot(&mut self, slot: usize) -> bool {
        match self.player.abilities.get(slot).copied() {
            Some(ability) => self.select_ability(ability),
            None => false,
        }
    }

    /// Advance once the roster has been cleared.
    ///
    /// Fires at most once per emptied roster; calling it again without the
    /// roster changing does nothing. Returns whether it fired.
    pub fn check_level_complete(&mut self) -> bool {
        if !self.ai_pieces.is_empty() || self.level_complete {
            return false;
        }
        self.level_complete = true;
        self.log(format!("level {} complete", self.level.number));
        self.next_level();
        true
    }

    /// Move to the next level, or finish the game after the last one.
    pub fn next_level(&mut self) {
        self.level = Level::new(self.level.number + 1);

        if self.level.number > MAX_LEVEL {
            self.victory = true;
            self.game_over = true;
            self.log(VICTORY_MESSAGE.to_string());
            return;
        }

        let ability = Ability::ALL[self.rng.random_range(0..Ability::ALL.len())];
        self.player.add_ability(ability);
        self.ai_pieces = self.level.roster();
        self.player.position = self.config.spawn;
        self.player.moves_remaining = 1;
        self.score += self.config.level_reward;
        self.player.heal(1);

        self.level_complete = false;
        self.clear_selection();
        self.selected_ability = None;
        self.log(format!(
            "starting level {}, gained {ability}",
            self.level.number
        ));
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = false;
        self.valid_moves.clear();
    }

    /// Record a line produced while resolving a click; it also goes into
    /// that click's `TurnReport`.
    pub(crate) fn log(&mut self, line: String) {
        self.note(line.clone());
        self.turn_lines.push(line);
    }

    /// Record a line produced outside a click. Event log only.
    pub(crate) fn note(&mut self, line: String) {
        if self.event_log.len() == EVENT_LOG_CAPACITY {
            self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

#[cfg(test)]
mod tests {
    use super::GameSession;
    use crate::game_errors::GameErrors;
    use crate::game_state::board_types::Position;
    use crate::game_state::game_config::GameConfig;
    use crate::game_state::game_rules::{EVENT_LOG_CAPACITY, VICTORY_MESSAGE};
    use crate::game_state::player::Ability;
    use crate::tables::level_catalog::Level;

    fn seeded() -> GameSession {
        GameSession::with_config(GameConfig {
            rng_seed: Some(42),
            ..GameConfig::default()
        })
        .expect("default config is valid")
    }

    #[test]
    fn fresh_session_matches_starting_rules() {
        let session = seeded();
        assert_eq!(session.level.number, 1);
        assert_eq!(session.player.position, Position::new(4, 7));
        assert_eq!(session.player.hp, 3);
        assert_eq!(session.player.abilities, vec![Ability::Shield]);
        assert_eq!(session.ai_pieces.len(), 3);
        assert_eq!(session.score, 0);
        assert!(session.accepts_input());
        assert_eq!(session.message(), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = GameSession::with_config(GameConfig {
            board_size: 0,
            ..GameConfig::default()
        })
        .err();
        assert_eq!(err, Some(GameErrors::InvalidBoardSize(0)));
    }

    #[test]
    fn selecting_twice_deselects_without_consuming() {
        let mut session = seeded();
        assert!(session.select_ability(Ability::Shield));
        assert_eq!(session.selected_ability, Some(Ability::Shield));
        assert!(session.select_ability(Ability::Shield));
        assert_eq!(session.selected_ability, None);
        assert_eq!(session.player.abilities, vec![Ability::Shield]);
    }

    #[test]
    fn selecting_an_unheld_ability_fails() {
        let mut session = seeded();
        assert!(!session.select_ability(Ability::Teleport));
        assert_eq!(session.selected_ability, None);
        assert!(!session.select_ability_slot(3));
    }

    #[test]
    fn selection_lines_stay_out_of_turn_reports() {
        let mut session = seeded();
        assert!(session.select_ability(Ability::Shield));
        assert!(session.turn_lines.is_empty());
        assert_eq!(
            session.event_log.back().map(String::as_str),
            Some("Shield selected")
        );

        let report = session.handle_click(Position::new(4, 7));
        assert!(report.info_lines.is_empty());
        assert!(session.turn_lines.is_empty());
    }

    #[test]
    fn heal_applies_on_selection() {
        let mut session = seeded();
        session.player.abilities = vec![Ability::Heal, Ability::Heal];
        assert!(session.select_ability(Ability::Heal));
        assert_eq!(session.player.hp, 4);
        assert_eq!(session.player.abilities, vec![Ability::Heal]);
        assert_eq!(session.selected_ability, None);
    }

    #[test]
    fn completion_check_fires_once_per_empty_roster() {
        let mut session = seeded();
        session.ai_pieces.clear();
        assert!(session.check_level_complete());
        assert_eq!(session.level.number, 2);
        assert_eq!(session.score, 500);
        assert_eq!(session.player.hp, 4);
        assert_eq!(session.player.abilities.len(), 2);

        assert!(!session.check_level_complete());
        assert_eq!(session.level.number, 2);
        assert_eq!(session.score, 500);
        assert_eq!(session.player.abilities.len(), 2);
    }

    #[test]
    fn clearing_the_last_level_is_victory() {
        let mut session = seeded();
        session.level = Level::new(5);
        session.ai_pieces.clear();
        let score = session.score;

        assert!(session.check_level_complete());
        assert!(session.victory);
        assert!(session.game_over);
        assert!(session.ai_pieces.is_empty());
        assert_eq!(session.score, score);
        assert_eq!(session.message(), Some(VICTORY_MESSAGE));

        assert!(!session.check_level_complete());
        assert!(!session.select_ability(Ability::Shield));
    }

    #[test]
    fn hp_bonus_is_capped() {
        let mut session = seeded();
        session.player.hp = 5;
        session.ai_pieces.clear();
        session.check_level_complete();
        assert_eq!(session.player.hp, 5);
    }

    #[test]
    fn reset_discards_progress() {
        let mut session = seeded();
        session.ai_pieces.clear();
        session.check_level_complete();
        session.player.hp = 1;
        session.reset();
        assert_eq!(session.level.number, 1);
        assert_eq!(session.score, 0);
        assert_eq!(session.player.hp, 3);
        assert_eq!(session.player.abilities, vec![Ability::Shield]);
        assert_eq!(session.ai_pieces.len(), 3);
    }

    #[test]
    fn event_log_is_bounded() {
        let mut session = seeded();
        for i in 0..EVENT_LOG_CAPACITY + 10 {
            session.note(format!("line {i}"));
        }
        assert_eq!(session.event_log.len(), EVENT_LOG_CAPACITY);
        assert_eq!(session.event_log.front().map(String::as_str), Some("line 10"));
    }
}
