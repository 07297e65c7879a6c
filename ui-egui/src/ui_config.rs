// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI Configuration System
//!
//! Window geometry, board appearance, button styling, font paths and
//! colors. Defaults reproduce the classic 600x730 layout; a JSON file can
//! override any of them.

use egui::{Color32, FontFamily, FontId, Vec2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tictactoe_core::SIZE;

/// File looked up in the working directory at startup
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.json";

/// Complete UI configuration for the game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Board visual configuration
    pub board: BoardConfig,
    /// Button styling configuration
    pub button: ButtonConfig,
    /// Font configuration
    pub fonts: FontConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Space below the board holding the buttons
    pub footer_height: f32,
    /// Background color
    pub background_color: SerializableColor,
}

/// Board visual configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Edge length of one cell in pixels
    pub tile_size: f32,
    /// Height of the status band above the board
    pub status_height: f32,
    /// Grid line color
    pub grid_color: SerializableColor,
    /// Grid line width
    pub grid_line_width: f32,
    /// Glyph size for X and O
    pub mark_font_size: f32,
    /// Glyph color for X and O
    pub mark_color: SerializableColor,
    /// Status text size while the game runs
    pub status_font_size: f32,
    /// Status text color while the game runs
    pub status_color: SerializableColor,
    /// Result text size on the game-over overlay
    pub result_font_size: f32,
    /// Result text color on the game-over overlay
    pub result_color: SerializableColor,
    /// Game-over overlay fill
    pub overlay_color: SerializableColor,
}

/// Button styling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Font size in points
    pub font_size: f32,
    /// Text color
    pub text_color: SerializableColor,
    /// Gap between the board and the buttons, and the left margin of "End Game"
    pub margin: f32,
    /// Distance of "Restart" from the right window edge
    pub restart_offset: f32,
    /// Underline thickness on hover
    pub underline_width: f32,
}

/// Font configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font file tried first
    pub path: PathBuf,
    /// Font file tried when `path` does not exist
    pub fallback_path: PathBuf,
}

/// Serializable color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_array();
        Self { r, g, b, a }
    }
}

impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Errors reading or writing a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tic Tac Toe".to_string(),
            footer_height: 50.0,
            background_color: SerializableColor::rgb(255, 255, 255),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tile_size: 200.0,
            status_height: 80.0,
            grid_color: SerializableColor::rgb(0, 0, 0),
            grid_line_width: 5.0,
            mark_font_size: 150.0,
            mark_color: SerializableColor::rgb(0, 0, 0),
            status_font_size: 50.0,
            status_color: SerializableColor::rgb(0, 0, 0),
            result_font_size: 60.0,
            result_color: SerializableColor::rgb(255, 255, 255),
            overlay_color: SerializableColor::rgba(0, 0, 0, 150),
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            font_size: 30.0,
            text_color: SerializableColor::rgb(0, 0, 0),
            margin: 10.0,
            restart_offset: 110.0,
            underline_width: 2.0,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("arial.ttf"),
            fallback_path: PathBuf::from("../arial.ttf"),
        }
    }
}

impl UiConfig {
    /// Load config from file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded UI config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config: {:#}", anyhow::Error::new(e));
                Self::default()
            }
        }
    }

    /// Edge length of the whole board
    pub fn board_extent(&self) -> f32 {
        self.board.tile_size * SIZE as f32
    }

    /// Inner window size: board width by status band + board + footer
    pub fn window_size(&self) -> Vec2 {
        let extent = self.board_extent();
        Vec2::new(
            extent,
            extent + self.board.status_height + self.window.footer_height,
        )
    }
}

/// Helper to create egui FontId from a size in the configured family
pub fn create_font_id(size: f32) -> FontId {
    FontId::new(size, FontFamily::Proportional)
}
