//! Game control buttons and interactions

use crate::components::BoardLayout;
use crate::msg::UiAction;
use crate::ui_config::{create_font_id, ButtonConfig, UiConfig};
use egui::{Color32, Pos2, Rect, Sense, Stroke, Ui};

const END_GAME_LABEL: &str = "End Game";
const RESTART_LABEL: &str = "Restart";

/// Top-left corners of the "End Game" and "Restart" labels
pub fn button_anchors(layout: &BoardLayout, config: &UiConfig) -> (Pos2, Pos2) {
    let y = layout.board_rect.max.y + config.button.margin;
    let end_game = Pos2::new(layout.window_rect.min.x + config.button.margin, y);
    let restart = Pos2::new(layout.window_rect.max.x - config.button.restart_offset, y);
    (end_game, restart)
}

/// Game control buttons
pub struct GameControls;

impl GameControls {
    /// Render the footer buttons, returning whichever was clicked
    pub fn render(ui: &mut Ui, layout: &BoardLayout, config: &UiConfig) -> Option<UiAction> {
        let (end_game_pos, restart_pos) = button_anchors(layout, config);
        let mut action = None;

        if Self::text_button(ui, END_GAME_LABEL, end_game_pos, &config.button) {
            action = Some(UiAction::Quit);
        }
        if Self::text_button(ui, RESTART_LABEL, restart_pos, &config.button) {
            action = Some(UiAction::Restart);
        }

        action
    }

    /// Plain text label, underlined while hovered; true when clicked
    fn text_button(ui: &mut Ui, label: &str, pos: Pos2, config: &ButtonConfig) -> bool {
        let color: Color32 = config.text_color.into();
        let galley = ui
            .painter()
            .layout_no_wrap(label.to_owned(), create_font_id(config.font_size), color);
        let rect = Rect::from_min_size(pos, galley.size());

        let response = ui.interact(rect, ui.id().with(label), Sense::click());
        ui.painter().galley(pos, galley, color);

        if response.hovered() {
            ui.painter().line_segment(
                [rect.left_bottom(), rect.right_bottom()],
                Stroke::new(config.underline_width, color),
            );
        }

        response.clicked()
    }
}
