//! Pixel-to-grid mapping for presentation layers.
//!
//! Renderers draw square cells of `cell_size` pixels with the board's top
//! left corner at the origin. The result is not bounds-checked against the
//! board; the session does that itself.

use crate::game_errors::{GameErrors, GameResult};
use crate::game_state::board_types::Position;

pub fn pixel_to_square(px: i32, py: i32, cell_size: i32) -> GameResult<Position> {
    if cell_size <= 0 {
        return Err(GameErrors::InvalidCellSize(cell_size));
    }
    if px < 0 || py < 0 {
        return Err(GameErrors::NegativePixel { px, py });
    }
    Ok(Position::new(px / cell_size, py / cell_size))
}
