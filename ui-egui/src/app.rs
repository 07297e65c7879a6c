// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application: owns the game and drives one frame at a time.

use crate::components::{BoardInteraction, BoardLayout, BoardRenderer, GameControls, StatusBanner};
use crate::msg::UiAction;
use crate::ui_config::UiConfig;
use egui::{CentralPanel, Color32, Context, Frame, ViewportCommand};
use tictactoe_core::GameState;

/// Main application state
pub struct TicTacToeApp {
    /// The single game instance
    game: GameState,
    /// UI configuration
    config: UiConfig,
    /// Set by "End Game"; the viewport is closed at the end of the frame
    close_requested: bool,
}

impl TicTacToeApp {
    pub fn new(config: UiConfig) -> Self {
        Self {
            game: GameState::new(),
            config,
            close_requested: false,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Apply one input action to the game
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Place(coord) => {
                self.game.apply_move(coord.row, coord.col);
            }
            UiAction::Restart => {
                tracing::info!("Restarting game");
                self.game.initialize();
            }
            UiAction::Quit => {
                tracing::info!("End Game clicked, closing window");
                self.close_requested = true;
            }
        }
    }

    /// Run one frame: input, status update, drawing
    pub fn show(&mut self, ctx: &Context) {
        let background: Color32 = self.config.window.background_color.into();

        CentralPanel::default()
            .frame(Frame::none().fill(background))
            .show(ctx, |ui| {
                let layout = BoardLayout::new(ui.max_rect().min, &self.config);

                let mut actions = Vec::new();
                if let Some(coord) = BoardInteraction::handle_interaction(ui, &layout) {
                    actions.push(UiAction::Place(coord));
                }
                actions.extend(GameControls::render(ui, &layout, &self.config));

                for action in actions {
                    self.apply(action);
                }
                self.game.update_status();

                let painter = ui.painter();
                BoardRenderer::render(painter, &layout, &self.game, &self.config);
                StatusBanner::render(painter, &layout, &self.game, &self.config);
            });

        if self.close_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
