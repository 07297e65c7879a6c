// SPDX-License-Identifier: MIT OR Apache-2.0

//! Actions produced by input handling during a frame.

use tictactoe_core::Coord;

/// What the player asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Left click on a board cell
    Place(Coord),
    /// "Restart" clicked
    Restart,
    /// "End Game" clicked
    Quit,
}
