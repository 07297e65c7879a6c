//! Game status and control components

mod controls;
mod status;

pub use controls::{button_anchors, GameControls};
pub use status::StatusBanner;
