//! Board interaction handling

use super::BoardLayout;
use egui::{Sense, Ui};
use tictactoe_core::Coord;

/// Board interaction handler
pub struct BoardInteraction;

impl BoardInteraction {
    /// Return the cell under a left click on the board this frame.
    ///
    /// Occupied cells are still reported; the game state ignores them.
    pub fn handle_interaction(ui: &mut Ui, layout: &BoardLayout) -> Option<Coord> {
        let response = ui.interact(layout.board_rect, ui.id().with("board"), Sense::click());

        if !response.clicked() {
            return None;
        }

        let pos = response.interact_pointer_pos()?;
        let coord = layout.pos_to_coord(pos);
        if coord.is_none() {
            tracing::trace!(?pos, "Click outside the grid");
        }
        coord
    }
}
