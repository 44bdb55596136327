//! Terminal-oriented text renderer.
//!
//! Row 0 (the AI's home rank) is printed first so the player starts at the
//! bottom, matching the on-screen layout of a graphical front end. `@` is the
//! player, capital letters are AI pieces, `*` marks a highlighted move.

use crate::game_state::board_types::Position;
use crate::utils::session_snapshot::SessionSnapshot;

/// The presentation collaborator. The core only ever hands it snapshots.
pub trait Renderer {
    fn render(&mut self, snapshot: &SessionSnapshot);
}

/// Renders into an in-memory frame the caller can print.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    pub frame: String,
}

impl Renderer for TextRenderer {
    fn render(&mut self, snapshot: &SessionSnapshot) {
        self.frame = render_game_state(snapshot);
    }
}

pub fn render_game_state(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    let size = snapshot.board_size;

    out.push_str("  ");
    for x in 0..size {
        out.push_str(&format!("{}", x % 10));
        if x < size - 1 {
            out.push(' ');
        }
    }
    out.push('\n');

    for y in 0..size {
        out.push_str(&format!("{} ", y % 10));
        for x in 0..size {
            let square = Position::new(x, y);
            let ch = match snapshot.glyph_at(square) {
                Some(ch) => ch,
                None if snapshot.valid_moves.contains(&square) => '*',
                None => '.',
            };
            out.push(ch);
            if x < size - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "HP: {}/{}{}  Score: {}  Level: {}/{}\n",
        snapshot.hp,
        snapshot.max_hp,
        if snapshot.shield_active { " [shield]" } else { "" },
        snapshot.score,
        snapshot.level,
        snapshot.max_level
    ));

    out.push_str("Abilities:");
    if snapshot.abilities.is_empty() {
        out.push_str(" none");
    }
    for (slot, ability) in snapshot.abilities.iter().enumerate() {
        let marker = if snapshot.selected_ability == Some(*ability) {
            "*"
        } else {
            ""
        };
        out.push_str(&format!(" [{slot}] {ability}{marker}"));
    }

    if let Some(message) = snapshot.message {
        out.push('\n');
        out.push_str(message);
    }

    out
}
