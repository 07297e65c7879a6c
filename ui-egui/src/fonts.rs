// SPDX-License-Identifier: MIT OR Apache-2.0

//! Font loading
//!
//! The window draws all text with a single font file read at startup. A
//! missing or unreadable file is fatal.

use crate::ui_config::FontConfig;
use egui::{FontData, FontDefinitions, FontFamily};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name the font is registered under in egui
const FONT_NAME: &str = "board-font";

/// Errors loading the startup font
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("font not found at {} or {}", primary.display(), fallback.display())]
    NotFound { primary: PathBuf, fallback: PathBuf },

    #[error("failed to read font {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {} is empty", path.display())]
    Empty { path: PathBuf },
}

/// Font bytes together with the path they came from
#[derive(Debug, Clone)]
pub struct FontAsset {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Pick the primary path if it exists, else the fallback
pub fn resolve_font_path(primary: &Path, fallback: &Path) -> Result<PathBuf, AssetError> {
    if primary.exists() {
        Ok(primary.to_path_buf())
    } else if fallback.exists() {
        Ok(fallback.to_path_buf())
    } else {
        Err(AssetError::NotFound {
            primary: primary.to_path_buf(),
            fallback: fallback.to_path_buf(),
        })
    }
}

/// Read the configured font from disk
pub fn load_font(config: &FontConfig) -> Result<FontAsset, AssetError> {
    let path = resolve_font_path(&config.path, &config.fallback_path)?;
    let bytes = std::fs::read(&path).map_err(|source| AssetError::Read {
        path: path.clone(),
        source,
    })?;

    if bytes.is_empty() {
        return Err(AssetError::Empty { path });
    }

    tracing::info!("Loaded font from {} ({} bytes)", path.display(), bytes.len());
    Ok(FontAsset { path, bytes })
}

/// Make the loaded font the first choice for proportional text
pub fn install_font(ctx: &egui::Context, font: FontAsset) {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), FontData::from_owned(font.bytes));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, FONT_NAME.to_owned());
    ctx.set_fonts(fonts);
}
