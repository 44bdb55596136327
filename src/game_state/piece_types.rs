//! AI piece kinds and the roster entry type.

use crate::game_state::board_types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Single-letter board glyph.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
        }
    }
}

/// One opponent on the board. Lives in the session roster from level load
/// until captured or the level is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiPiece {
    pub kind: PieceKind,
    pub position: Position,
}

impl AiPiece {
    #[inline]
    pub const fn new(kind: PieceKind, position: Position) -> Self {
        Self { kind, position }
    }
}
