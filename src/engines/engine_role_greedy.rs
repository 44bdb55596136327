//! Default opponent: zero-lookahead greedy choice per piece.
//!
//! Each piece scores its candidates with the formula for its roster role and
//! takes the best one. Ties keep the first candidate in step-table order.
//! Pieces are scored independently against the player's current square, so
//! two of them may pick the same destination.

use crate::engines::engine_trait::{AiEngine, EngineOutput};
use crate::game_state::board_types::{Board, Position};
use crate::game_state::piece_types::AiPiece;
use crate::game_state::player::Player;
use crate::move_generation::move_generator::generate_piece_moves;
use crate::search::move_scoring::{score_move, Role, RolePolicy};

#[derive(Debug, Clone, Default)]
pub struct RoleGreedyEngine {
    role_policy: RolePolicy,
}

impl RoleGreedyEngine {
    pub fn new(role_policy: RolePolicy) -> Self {
        Self { role_policy }
    }

    /// Highest scoring candidate, or `None` when there are no candidates.
    pub fn best_move(
        role: Role,
        candidates: &[Position],
        player: Position,
        board: &Board,
    ) -> Option<(Position, f64)> {
        let mut best: Option<(Position, f64)> = None;
        for &candidate in candidates {
            let score = score_move(role, candidate, player, board);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }
        best
    }
}

impl AiEngine for RoleGreedyEngine {
    fn name(&self) -> &str {
        "role greedy"
    }

    fn choose_moves(
        &mut self,
        pieces: &[AiPiece],
        player: &Player,
        board: &Board,
    ) -> EngineOutput {
        let mut out = EngineOutput::default();

        for (idx, piece) in pieces.iter().enumerate() {
            let Some(role) = self.role_policy.role_for_index(idx) else {
                out.destinations.push(piece.position);
                out.info_lines.push(format!(
                    "info string role_greedy {} at {} has no role, holds",
                    piece.kind.name(),
                    piece.position
                ));
                continue;
            };

            let candidates = generate_piece_moves(piece, board);
            match Self::best_move(role, &candidates, player.position, board) {
                Some((dest, score)) => {
                    out.destinations.push(dest);
                    out.info_lines.push(format!(
                        "info string role_greedy {} {:?} {} -> {} score {:.2}",
                        piece.kind.name(),
                        role,
                        piece.position,
                        dest,
                        score
                    ));
                }
                None => out.destinations.push(piece.position),
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::RoleGreedyEngine;
    use crate::engines::engine_trait::AiEngine;
    use crate::game_state::board_types::{Board, Position};
    use crate::game_state::piece_types::{AiPiece, PieceKind};
    use crate::game_state::player::Player;
    use crate::move_generation::move_generator::generate_piece_moves;
    use crate::search::move_scoring::{Role, RolePolicy};
    use crate::tables::level_catalog::level_roster;

    fn player_at(x: i32, y: i32) -> Player {
        Player::new(Position::new(x, y), 3, 5, Vec::new())
    }

    #[test]
    fn level_one_opening_reply() {
        let board = Board::default();
        let pieces = level_roster(1);
        let mut engine = RoleGreedyEngine::default();
        let out = engine.choose_moves(&pieces, &player_at(4, 6), &board);

        // Pawn blocker: (1,2) (2,2) (0,2); (2,2) is closest at distance > 2.
        // Knight attacker from (3,1): (4,3) is straight up the file, three away.
        // Rook supporter from (6,1): (6,2) sits about 4.47 away, nearest to 3.
        assert_eq!(
            out.destinations,
            vec![Position::new(2, 2), Position::new(4, 3), Position::new(6, 2)]
        );
    }

    #[test]
    fn destinations_come_from_the_candidate_set() {
        let board = Board::default();
        let mut engine = RoleGreedyEngine::new(RolePolicy::Cycle);
        for level in 1..=5 {
            let pieces = level_roster(level);
            let out = engine.choose_moves(&pieces, &player_at(4, 7), &board);
            assert_eq!(out.destinations.len(), pieces.len());
            for (piece, dest) in pieces.iter().zip(&out.destinations) {
                let candidates = generate_piece_moves(piece, &board);
                if candidates.is_empty() {
                    assert_eq!(*dest, piece.position);
                } else {
                    assert!(candidates.contains(dest));
                }
            }
        }
    }

    #[test]
    fn reachable_player_is_always_captured() {
        let board = Board::default();
        let player = player_at(4, 4);
        let pieces = vec![
            AiPiece::new(PieceKind::Pawn, Position::new(3, 3)),
            AiPiece::new(PieceKind::Knight, Position::new(2, 3)),
            AiPiece::new(PieceKind::Rook, Position::new(4, 3)),
        ];
        let mut engine = RoleGreedyEngine::default();
        let out = engine.choose_moves(&pieces, &player, &board);
        assert!(out.destinations.iter().all(|&d| d == player.position));
    }

    #[test]
    fn fourth_piece_holds_under_default_policy() {
        let board = Board::default();
        let pieces = level_roster(3);
        let mut engine = RoleGreedyEngine::default();
        let out = engine.choose_moves(&pieces, &player_at(4, 7), &board);
        assert_eq!(out.destinations[4], pieces[4].position);

        let mut cycling = RoleGreedyEngine::new(RolePolicy::Cycle);
        let out = cycling.choose_moves(&pieces, &player_at(4, 7), &board);
        assert_ne!(out.destinations[4], pieces[4].position);
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let board = Board::default();
        // Both (3,3) and (5,3) are within two squares of the player: flat 10.
        let candidates = [Position::new(3, 3), Position::new(5, 3), Position::new(4, 3)];
        let best = RoleGreedyEngine::best_move(
            Role::Blocker,
            &candidates,
            Position::new(4, 4),
            &board,
        );
        assert_eq!(best.map(|(p, _)| p), Some(Position::new(3, 3)));
    }
}
