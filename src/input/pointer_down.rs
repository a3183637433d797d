//! Pointer-down handling: gesture arming.
//!
//! Down never commits anything. Over a node it arms a potential drag with
//! the grab offset recorded; anywhere else it arms a potential pan. The
//! outcome (click vs. drag vs. pan) is decided by later move/up events.

use crate::canvas::GraphCanvas;
use crate::hit;
use crate::input::coords::CoordinateConverter;
use crate::input::state::InputState;
use gpui::{Pixels, Point};

impl GraphCanvas {
    pub fn handle_pointer_down(&mut self, position: Point<Pixels>) {
        let sim_pos = CoordinateConverter::screen_to_sim(position, &self.viewport);
        self.spatial.ensure(&self.model);

        if let Some(node) = hit::node_at_indexed(&self.model, &self.spatial, sim_pos) {
            let center = self.model.nodes[node].effective_position();
            self.input_state = InputState::PotentialDrag {
                node,
                start: position,
                grab_offset: (sim_pos.0 - center.0, sim_pos.1 - center.1),
            };
        } else {
            self.input_state = InputState::PotentialPan {
                start: position,
                offset_at_start: self.viewport.offset,
            };
        }
    }
}
