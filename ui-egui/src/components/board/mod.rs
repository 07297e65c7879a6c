//! Board rendering components

mod interaction;
mod renderer;

pub use interaction::BoardInteraction;
pub use renderer::BoardRenderer;

use crate::ui_config::UiConfig;
use egui::{Pos2, Rect, Vec2};
use tictactoe_core::{Coord, SIZE};

/// Convert board coordinate to the screen rectangle of its cell
pub fn coord_to_rect(coord: Coord, board_rect: Rect, cell_size: f32) -> Rect {
    let min = board_rect.min + Vec2::new(coord.col as f32, coord.row as f32) * cell_size;
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

/// Convert screen position to board coordinate
pub fn pos_to_coord(pos: Pos2, board_rect: Rect, cell_size: f32) -> Option<Coord> {
    let rel_pos = pos - board_rect.min;
    if rel_pos.x < 0.0 || rel_pos.y < 0.0 {
        return None;
    }

    // floor, so a boundary pixel belongs to the cell to its right/below
    let col = (rel_pos.x / cell_size).floor() as usize;
    let row = (rel_pos.y / cell_size).floor() as usize;
    let coord = Coord::new(row, col);

    coord.is_valid().then_some(coord)
}

/// Where the board sits inside the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Window area the layout was computed for
    pub window_rect: Rect,
    /// The 3x3 playing area, below the status band
    pub board_rect: Rect,
    pub cell_size: f32,
}

impl BoardLayout {
    /// Lay the board out from the window's top-left corner
    pub fn new(origin: Pos2, config: &UiConfig) -> Self {
        let cell_size = config.board.tile_size;
        let board_rect = Rect::from_min_size(
            origin + Vec2::new(0.0, config.board.status_height),
            Vec2::splat(cell_size * SIZE as f32),
        );

        Self {
            window_rect: Rect::from_min_size(origin, config.window_size()),
            board_rect,
            cell_size,
        }
    }

    pub fn pos_to_coord(&self, pos: Pos2) -> Option<Coord> {
        pos_to_coord(pos, self.board_rect, self.cell_size)
    }

    pub fn cell_rect(&self, coord: Coord) -> Rect {
        coord_to_rect(coord, self.board_rect, self.cell_size)
    }

    /// The status band above the board
    pub fn status_rect(&self) -> Rect {
        Rect::from_min_max(
            self.window_rect.min,
            Pos2::new(self.window_rect.max.x, self.board_rect.min.y),
        )
    }

    /// The strip below the board holding the buttons
    pub fn footer_rect(&self) -> Rect {
        Rect::from_min_max(
            Pos2::new(self.window_rect.min.x, self.board_rect.max.y),
            self.window_rect.max,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rect_round_trips_through_center() {
        let layout = BoardLayout::new(Pos2::ZERO, &UiConfig::default());
        for coord in Coord::all() {
            let rect = layout.cell_rect(coord);
            assert_eq!(layout.pos_to_coord(rect.center()), Some(coord));
            assert_eq!(rect.width(), 200.0);
        }
    }

    #[test]
    fn test_bands_surround_board() {
        let layout = BoardLayout::new(Pos2::ZERO, &UiConfig::default());
        assert_eq!(layout.status_rect().height(), 80.0);
        assert_eq!(layout.footer_rect().height(), 50.0);
        assert_eq!(layout.board_rect.max.y, 680.0);
    }
}
