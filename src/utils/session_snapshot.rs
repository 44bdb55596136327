//! Read-only view of a session for renderers.
//!
//! A snapshot is a plain owned copy, so a renderer can hold on to it while
//! the session keeps mutating.

use crate::game_state::board_types::Position;
use crate::game_state::game_session::GameSession;
use crate::game_state::piece_types::AiPiece;
use crate::game_state::player::Ability;
use crate::tables::level_catalog::MAX_LEVEL;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub board_size: i32,
    pub player_position: Position,
    pub ai_pieces: Vec<AiPiece>,
    pub valid_moves: Vec<Position>,
    pub hp: i32,
    pub max_hp: i32,
    pub shield_active: bool,
    pub score: u32,
    pub level: u32,
    pub max_level: u32,
    pub difficulty: u32,
    pub abilities: Vec<Ability>,
    pub selected_ability: Option<Ability>,
    pub game_over: bool,
    pub victory: bool,
    pub message: Option<&'static str>,
}

impl SessionSnapshot {
    /// Piece letter on `square`, `@` for the player.
    pub fn glyph_at(&self, square: Position) -> Option<char> {
        if square == self.player_position {
            return Some('@');
        }
        self.ai_pieces
            .iter()
            .find(|p| p.position == square)
            .map(|p| p.kind.symbol())
    }
}

impl GameSession {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board_size: self.board.size,
            player_position: self.player.position,
            ai_pieces: self.ai_pieces.clone(),
            valid_moves: self.valid_moves.clone(),
            hp: self.player.hp,
            max_hp: self.player.max_hp,
            shield_active: self.player.shield_active,
            score: self.score,
            level: self.level.number.min(MAX_LEVEL),
            max_level: MAX_LEVEL,
            difficulty: self.level.difficulty(),
            abilities: self.player.abilities.clone(),
            selected_ability: self.selected_ability,
            game_over: self.game_over,
            victory: self.victory,
            message: self.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board_types::Position;
    use crate::game_state::game_session::GameSession;
    use crate::game_state::player::Ability;

    #[test]
    fn snapshot_reflects_fresh_session() {
        let snap = GameSession::new().snapshot();
        assert_eq!(snap.board_size, 8);
        assert_eq!(snap.hp, 3);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.difficulty, 1);
        assert_eq!(snap.abilities, vec![Ability::Shield]);
        assert_eq!(snap.glyph_at(Position::new(4, 7)), Some('@'));
        assert_eq!(snap.glyph_at(Position::new(3, 1)), Some('N'));
        assert_eq!(snap.glyph_at(Position::new(0, 0)), None);
        assert_eq!(snap.message, None);
    }

    #[test]
    fn snapshot_includes_highlights_while_selected() {
        let mut session = GameSession::new();
        session.handle_click(Position::new(4, 7));
        assert_eq!(session.snapshot().valid_moves.len(), 5);
    }
}
