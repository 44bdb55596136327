//! AI engine abstraction used by the turn controller.
//!
//! An engine sees the roster and the player as they stand before the AI
//! moves, and answers with exactly one destination per piece, in roster
//! order. Engines do not mutate the session; the controller applies the
//! destinations and resolves collisions.

use crate::game_state::board_types::{Board, Position};
use crate::game_state::piece_types::AiPiece;
use crate::game_state::player::Player;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub destinations: Vec<Position>,
    pub info_lines: Vec<String>,
}

pub trait AiEngine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_moves(
        &mut self,
        pieces: &[AiPiece],
        player: &Player,
        board: &Board,
    ) -> EngineOutput;
}
