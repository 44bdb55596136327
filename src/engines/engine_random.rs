//! Diagnostic opponent that picks a uniformly random candidate per piece.
//!
//! Useful as a weak baseline in the autoplay harness. Pieces without
//! candidates stay put, as with the greedy engine.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{AiEngine, EngineOutput};
use crate::game_state::board_types::Board;
use crate::game_state::piece_types::AiPiece;
use crate::game_state::player::Player;
use crate::move_generation::move_generator::generate_piece_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AiEngine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_moves(
        &mut self,
        pieces: &[AiPiece],
        _player: &Player,
        board: &Board,
    ) -> EngineOutput {
        let mut out = EngineOutput::default();

        for piece in pieces {
            let candidates = generate_piece_moves(piece, board);
            let dest = candidates
                .as_slice()
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(piece.position);
            out.destinations.push(dest);
        }

        out.info_lines.push(format!(
            "info string random_engine pieces {}",
            pieces.len()
        ));
        out
    }
}
