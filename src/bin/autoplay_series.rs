//! Scripted self-play series runner.
//!
//! Run with:
//! `cargo run --release --bin autoplay_series`
//! `cargo run --release --bin autoplay_series -- --verbose --cycle`

use moodeng_chess::game_state::game_config::GameConfig;
use moodeng_chess::search::move_scoring::RolePolicy;
use moodeng_chess::utils::autoplay_harness::{play_autoplay_series, AutoplayConfig};

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let role_policy = if std::env::args().any(|a| a == "--cycle") {
        RolePolicy::Cycle
    } else {
        RolePolicy::HoldStill
    };

    let stats = play_autoplay_series(&AutoplayConfig {
        games: 100,
        base_seed: 1234,
        max_turns: 400,
        game: GameConfig {
            role_policy,
            ..GameConfig::default()
        },
        verbose,
    })
    .map_err(|e| e.to_string())?;

    println!("roles: {role_policy:?}");
    println!("{}", stats.report());
    Ok(())
}
