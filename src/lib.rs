//! Crate root module declarations for the Moodeng chess game core.
//!
//! A king-moving player piece against chess-styled AI opponents on a small
//! grid. This file exposes the session and turn controller, move generation,
//! AI scoring and engines, the level tables, and presentation helpers so
//! binaries, tests and front ends can import stable module paths.

pub mod game_errors;

pub mod game_state {
    pub mod board_types;
    pub mod game_config;
    pub mod game_rules;
    pub mod game_session;
    pub mod piece_types;
    pub mod player;
    pub mod turn_controller;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod move_generator;
}

pub mod search {
    pub mod move_scoring;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_role_greedy;
    pub mod engine_trait;
}

pub mod tables {
    pub mod level_catalog;
}

pub mod utils {
    pub mod autoplay_harness;
    pub mod input_mapping;
    pub mod render_game_state;
    pub mod session_snapshot;
}
