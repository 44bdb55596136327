//! Candidate move generation.
//!
//! Candidates depend only on a piece's kind, its square and the board size.
//! Other pieces are never consulted: there is no blocking and no capture
//! avoidance, so an AI candidate may land on the player or on another AI
//! piece. The turn controller resolves occupancy afterwards.
//!
//! Bishops and queens have no step table and therefore no candidates. The
//! decision policy treats an empty candidate list as "stay put", which keeps
//! those pieces parked on their starting squares for the whole level.

use crate::game_state::board_types::{Board, Position};
use crate::game_state::piece_types::{AiPiece, PieceKind};
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_targets;
use crate::moves::rook_moves::rook_targets;

/// Candidate squares for an AI piece, in step-table order.
pub fn generate_piece_moves(piece: &AiPiece, board: &Board) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => pawn_targets(piece.position, board),
        PieceKind::Knight => knight_targets(piece.position, board),
        PieceKind::Rook => rook_targets(piece.position, board),
        PieceKind::Bishop | PieceKind::Queen => Vec::new(),
    }
}

/// King-style candidate squares for the player.
#[inline]
pub fn generate_player_moves(from: Position, board: &Board) -> Vec<Position> {
    king_targets(from, board)
}
