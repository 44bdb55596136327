//! Seeded self-play harness for checking level balance.
//!
//! A scripted player stands in for the human: it captures when a piece is
//! adjacent, otherwise takes a random king step, and keeps a Shield raised
//! and heals when hurt whenever it holds those abilities. Each game gets its
//! own seed derived from `base_seed`, so a series is reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_errors::GameResult;
use crate::game_state::board_types::Position;
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_session::GameSession;
use crate::game_state::player::Ability;
use crate::game_state::turn_controller::ClickOutcome;

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub games: u16,
    pub base_seed: u64,
    pub max_turns: u32,
    pub game: GameConfig,
    pub verbose: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            games: 20,
            base_seed: 1234,
            max_turns: 400,
            game: GameConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Victory,
    Defeat,
    TurnLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub level_reached: u32,
    pub score: u32,
    pub turns: u32,
}

#[derive(Debug, Clone, Default)]
pub struct AutoplayStats {
    pub games: Vec<GameSummary>,
}

impl AutoplayStats {
    pub fn count(&self, outcome: GameOutcome) -> usize {
        self.games.iter().filter(|g| g.outcome == outcome).count()
    }

    pub fn average_score(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        let total: u64 = self.games.iter().map(|g| u64::from(g.score)).sum();
        total as f64 / self.games.len() as f64
    }

    pub fn report(&self) -> String {
        let mut per_level = [0usize; 6];
        for g in &self.games {
            per_level[(g.level_reached as usize).min(5)] += 1;
        }
        format!(
            "games {} | victories {} | defeats {} | turn limit {} | avg score {:.1} | reached level 1..5 {:?}",
            self.games.len(),
            self.count(GameOutcome::Victory),
            self.count(GameOutcome::Defeat),
            self.count(GameOutcome::TurnLimit),
            self.average_score(),
            &per_level[1..]
        )
    }
}

/// Play one scripted game to completion or `max_turns`.
pub fn play_autoplay_game(
    game: &GameConfig,
    seed: u64,
    max_turns: u32,
) -> GameResult<GameSummary> {
    let mut session = GameSession::with_config(GameConfig {
        rng_seed: Some(seed),
        ..game.clone()
    })?;
    let mut rng = StdRng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
    let mut turns = 0u32;

    while !session.game_over && turns < max_turns {
        use_defensive_abilities(&mut session);

        let from = session.player.position;
        if session.handle_click(from).outcome != ClickOutcome::PlayerSelected {
            break;
        }
        let Some(target) = choose_step(&session, &mut rng) else {
            break;
        };
        if session.handle_click(target).outcome == ClickOutcome::TurnResolved {
            turns += 1;
        }
    }

    let outcome = if session.victory {
        GameOutcome::Victory
    } else if session.game_over {
        GameOutcome::Defeat
    } else {
        GameOutcome::TurnLimit
    };

    Ok(GameSummary {
        outcome,
        level_reached: session.snapshot().level,
        score: session.score,
        turns,
    })
}

pub fn play_autoplay_series(config: &AutoplayConfig) -> GameResult<AutoplayStats> {
    let mut stats = AutoplayStats::default();
    for game_idx in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game_idx));
        let summary = play_autoplay_game(&config.game, seed, config.max_turns)?;
        if config.verbose {
            println!(
                "game {game_idx} seed {seed}: {:?} level {} score {} turns {}",
                summary.outcome, summary.level_reached, summary.score, summary.turns
            );
        }
        stats.games.push(summary);
    }
    Ok(stats)
}

fn use_defensive_abilities(session: &mut GameSession) {
    if session.player.hp < session.player.max_hp && session.player.has_ability(Ability::Heal) {
        session.select_ability(Ability::Heal);
    }
    if !session.player.shield_active
        && session.selected_ability.is_none()
        && session.player.has_ability(Ability::Shield)
    {
        session.select_ability(Ability::Shield);
    }
}

fn choose_step(session: &GameSession, rng: &mut StdRng) -> Option<Position> {
    let capture = session
        .valid_moves
        .iter()
        .copied()
        .find(|sq| session.ai_pieces.iter().any(|p| p.position == *sq));
    capture.or_else(|| session.valid_moves.as_slice().choose(rng).copied())
}
