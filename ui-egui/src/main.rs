// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI

use anyhow::{Context as _, Result};
use std::path::Path;
use tictactoe_ui::{
    fonts,
    ui_config::{UiConfig, DEFAULT_CONFIG_FILE},
    TicTacToeApp,
};
use tracing_subscriber::EnvFilter;

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

fn main() -> Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let config = UiConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE));

    let font = match fonts::load_font(&config.fonts) {
        Ok(font) => font,
        Err(e) => {
            tracing::error!("Error loading font: {}", e);
            return Err(e).context("Error loading font");
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size(config.window_size())
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    let title = config.window.title.clone();
    tracing::info!("Starting {}", title);

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            fonts::install_font(&cc.egui_ctx, font);
            Box::new(TicTacToeApp::new(config))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))
}
