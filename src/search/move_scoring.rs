//! Role assignment and the per-role move score.
//!
//! Roles are handed out by roster index: first piece blocks, second attacks,
//! third supports. `RolePolicy` decides what happens to pieces past the end
//! of the role table.
//!
//! Score bounds (8x8, distance measured to the player's pre-move square):
//! blocker <= 20, attacker <= 30, supporter <= 20 before the capture bonus.
//! A capture is worth at least `10 + 100 - 5`, so a reachable player square
//! always wins.

use crate::game_state::board_types::{Board, Position};

pub const CAPTURE_BONUS: f64 = 100.0;
pub const EDGE_PENALTY: f64 = 5.0;
pub const SUPPORTER_STANDOFF: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Blocker,
    Attacker,
    Supporter,
}

pub const ROLE_TABLE: [Role; 3] = [Role::Blocker, Role::Attacker, Role::Supporter];

/// What pieces beyond `ROLE_TABLE` do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RolePolicy {
    /// Extra pieces get no role and hold their square.
    #[default]
    HoldStill,
    /// Roles repeat: the fourth piece blocks, the fifth attacks, and so on.
    Cycle,
}

impl RolePolicy {
    #[inline]
    pub fn role_for_index(self, index: usize) -> Option<Role> {
        match self {
            RolePolicy::HoldStill => ROLE_TABLE.get(index).copied(),
            RolePolicy::Cycle => Some(ROLE_TABLE[index % ROLE_TABLE.len()]),
        }
    }
}

/// Score a single candidate square for a piece playing `role`.
pub fn score_move(role: Role, candidate: Position, player: Position, board: &Board) -> f64 {
    let distance = candidate.distance_to(player);

    let mut score = match role {
        Role::Blocker => {
            if distance > 2.0 {
                20.0 - distance
            } else {
                10.0
            }
        }
        Role::Attacker => 30.0 - distance,
        Role::Supporter => 20.0 - (distance - SUPPORTER_STANDOFF).abs(),
    };

    if candidate == player {
        score += CAPTURE_BONUS;
    }
    if board.is_edge(candidate) {
        score -= EDGE_PENALTY;
    }

    score
}
