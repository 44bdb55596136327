//! Turn resolution: one decoded grid click in, one complete turn out.
//!
//! A turn runs synchronously from the accepted player move through the AI
//! reply to the level-completion check. The flow is
//!
//! 1. `Idle`: clicking the player's own square selects it and publishes the
//!    king-step targets in `valid_moves`.
//! 2. `PlayerSelected`: the next click is the move. Anything outside
//!    `valid_moves` just clears the selection, unless Teleport is armed, in
//!    which case any on-board square is accepted.
//! 3. The AI replies once per turn cycle, after the player's last remaining
//!    move (two moves when Double Move fired).
//!
//! Invalid input never errors; it is reported as `ClickOutcome::Ignored` or
//! `ClickOutcome::SelectionCleared` and leaves the session untouched.

use crate::game_errors::GameResult;
use crate::game_state::board_types::Position;
use crate::game_state::game_session::GameSession;
use crate::game_state::player::Ability;
use crate::move_generation::move_generator::generate_player_moves;
use crate::utils::input_mapping::pixel_to_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened: game over, off-board, or not the player's square.
    Ignored,
    /// The player piece is selected and `valid_moves` is populated.
    PlayerSelected,
    /// A selection was dropped because the clicked square was not a move.
    SelectionCleared,
    /// A move was made and the player still has another before the AI acts.
    AwaitingSecondMove,
    /// The player moved and the AI replied.
    TurnResolved,
}

#[derive(Debug, Clone)]
pub struct TurnReport {
    pub outcome: ClickOutcome,
    pub info_lines: Vec<String>,
}

impl GameSession {
    /// Feed one grid click into the session.
    pub fn handle_click(&mut self, square: Position) -> TurnReport {
        self.turn_lines.clear();
        let outcome = self.dispatch_click(square);
        TurnReport {
            outcome,
            info_lines: std::mem::take(&mut self.turn_lines),
        }
    }

    /// Map a pixel click through `cell_size` and feed it in.
    pub fn handle_pixel_click(
        &mut self,
        px: i32,
        py: i32,
        cell_size: i32,
    ) -> GameResult<TurnReport> {
        let square = pixel_to_square(px, py, cell_size)?;
        Ok(self.handle_click(square))
    }

    fn dispatch_click(&mut self, square: Position) -> ClickOutcome {
        if !self.accepts_input() {
            return ClickOutcome::Ignored;
        }

        if !self.selected {
            if square != self.player.position {
                return ClickOutcome::Ignored;
            }
            self.selected = true;
            self.valid_moves = generate_player_moves(self.player.position, &self.board);
            return ClickOutcome::PlayerSelected;
        }

        let outcome = self.resolve_player_move(square);
        self.clear_selection();
        if self.check_level_complete() && self.victory {
            self.log(format!("final score {}", self.score));
        }
        outcome
    }

    fn resolve_player_move(&mut self, square: Position) -> ClickOutcome {
        let teleporting = self.selected_ability == Some(Ability::Teleport)
            && self.board.contains(square)
            && self.player.has_ability(Ability::Teleport);

        if !teleporting && !self.valid_moves.contains(&square) {
            return ClickOutcome::SelectionCleared;
        }

        self.fire_armed_ability(teleporting);

        if let Some(idx) = self.ai_pieces.iter().position(|p| p.position == square) {
            let captured = self.ai_pieces.remove(idx);
            self.score += self.config.capture_reward;
            self.log(format!(
                "captured {} at {square}, score {}",
                captured.kind.name(),
                self.score
            ));
        }

        self.player.position = square;
        self.player.moves_remaining = self.player.moves_remaining.saturating_sub(1);

        if self.player.moves_remaining > 0 {
            self.log(format!("moved to {square}, one more move"));
            return ClickOutcome::AwaitingSecondMove;
        }

        self.run_ai_turn();
        self.player.moves_remaining = 1;
        ClickOutcome::TurnResolved
    }

    /// Consume the armed ability, if any, as the move is accepted.
    fn fire_armed_ability(&mut self, teleporting: bool) {
        let Some(ability) = self.selected_ability else {
            return;
        };

        let fired = match ability {
            Ability::Teleport => teleporting && self.player.use_ability(Ability::Teleport),
            // First move of a cycle only.
            Ability::ExtraMove => {
                self.player.moves_remaining == 1 && self.player.use_ability(Ability::ExtraMove)
            }
            Ability::Shield => self.player.use_ability(Ability::Shield),
            Ability::Heal => false,
        };

        if fired {
            self.selected_ability = None;
            self.log(format!("{ability} used"));
        }
    }

    /// Let every AI piece make its move and resolve hits on the player.
    fn run_ai_turn(&mut self) {
        let output = self
            .engine
            .choose_moves(&self.ai_pieces, &self.player, &self.board);
        self.turn_lines.extend(output.info_lines);

        for (idx, dest) in output.destinations.into_iter().enumerate() {
            if idx >= self.ai_pieces.len() {
                break;
            }
            if !self.board.contains(dest) {
                continue;
            }
            let blocked = self
                .ai_pieces
                .iter()
                .enumerate()
                .any(|(other, p)| other != idx && p.position == dest);
            if blocked {
                self.log(format!(
                    "{} at {} holds, {dest} is taken",
                    self.ai_pieces[idx].kind.name(),
                    self.ai_pieces[idx].position
                ));
                continue;
            }

            self.ai_pieces[idx].position = dest;
            if dest == self.player.position && !self.game_over {
                self.resolve_hit(idx);
            }
        }
    }

    fn resolve_hit(&mut self, attacker: usize) {
        let kind = self.ai_pieces[attacker].kind;

        if self.player.shield_active {
            self.player.shield_active = false;
            self.log(format!("shield blocked the {}", kind.name()));
            return;
        }

        let hp = self.player.take_hit();
        self.log(format!("hit by {}, hp {hp}", kind.name()));
        if hp == 0 {
            self.game_over = true;
            self.log("game over".to_string());
        } else {
            self.player.position = self.config.spawn;
        }
    }
}
