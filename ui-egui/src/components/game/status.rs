//! Game status display

use crate::components::BoardLayout;
use crate::ui_config::{create_font_id, UiConfig};
use egui::{Align2, Color32, Painter, Pos2};
use tictactoe_core::GameState;

/// Game status display component
pub struct StatusBanner;

impl StatusBanner {
    /// Render the status line.
    ///
    /// While the game runs the message sits centered above the board. Once
    /// it has ended the board is dimmed and the result is shown on top.
    pub fn render(painter: &Painter, layout: &BoardLayout, game_state: &GameState, config: &UiConfig) {
        let message = game_state.status_message();

        if game_state.status().is_terminal() {
            painter.rect_filled(layout.board_rect, 0.0, Color32::from(config.board.overlay_color));
            painter.text(
                layout.board_rect.center(),
                Align2::CENTER_CENTER,
                message,
                create_font_id(config.board.result_font_size),
                config.board.result_color.into(),
            );
        } else {
            let status = layout.status_rect();
            painter.text(
                Pos2::new(status.center().x, status.min.y),
                Align2::CENTER_TOP,
                message,
                create_font_id(config.board.status_font_size),
                config.board.status_color.into(),
            );
        }
    }
}
