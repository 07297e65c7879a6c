//! Board rendering logic

use super::BoardLayout;
use crate::ui_config::{create_font_id, UiConfig};
use egui::{Align2, Color32, Painter, Pos2, Rect, Vec2};
use tictactoe_core::{GameState, SIZE};

/// Board renderer component
pub struct BoardRenderer;

impl BoardRenderer {
    /// Render grid lines and marks
    pub fn render(painter: &Painter, layout: &BoardLayout, game_state: &GameState, config: &UiConfig) {
        Self::render_grid(painter, layout, config);
        Self::render_marks(painter, layout, game_state, config);
    }

    /// Grid lines are centered on every cell boundary, outer edges included
    fn render_grid(painter: &Painter, layout: &BoardLayout, config: &UiConfig) {
        let color: Color32 = config.board.grid_color.into();
        let width = config.board.grid_line_width;
        let half = width / 2.0;
        let board = layout.board_rect;

        for i in 0..=SIZE {
            let offset = i as f32 * layout.cell_size;

            let horizontal = Rect::from_min_size(
                Pos2::new(board.min.x, board.min.y + offset - half),
                Vec2::new(board.width(), width),
            );
            painter.rect_filled(horizontal, 0.0, color);

            let vertical = Rect::from_min_size(
                Pos2::new(board.min.x + offset - half, board.min.y),
                Vec2::new(width, board.height()),
            );
            painter.rect_filled(vertical, 0.0, color);
        }
    }

    fn render_marks(painter: &Painter, layout: &BoardLayout, game_state: &GameState, config: &UiConfig) {
        let font_id = create_font_id(config.board.mark_font_size);
        let color: Color32 = config.board.mark_color.into();

        for (coord, cell) in game_state.board().iter() {
            if let Some(mark) = cell {
                painter.text(
                    layout.cell_rect(coord).center(),
                    Align2::CENTER_CENTER,
                    mark.to_string(),
                    font_id.clone(),
                    color,
                );
            }
        }
    }
}
