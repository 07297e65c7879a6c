// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(clippy::all)]

//! Tic-tac-toe desktop UI library

pub mod app;
pub mod components;
pub mod fonts;
pub mod msg;
pub mod ui_config;

pub use app::TicTacToeApp;
pub use msg::UiAction;
pub use ui_config::UiConfig;
