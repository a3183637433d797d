//! Pointer-up handling: click resolution and gesture commit.
//!
//! Release from an armed state (threshold never crossed) resolves to a
//! click on whatever was under the pointer at the down event. Release from
//! a committed drag unpins the node where it stands; release from a pan
//! just ends the pan. Committed gestures never produce click events.

use crate::canvas::{CanvasEvent, GraphCanvas};
use crate::hit;
use crate::input::coords::CoordinateConverter;
use crate::input::state::InputState;
use gpui::{Pixels, Point};

impl GraphCanvas {
    pub fn handle_pointer_up(&mut self, position: Point<Pixels>) -> Option<CanvasEvent> {
        let state = std::mem::take(&mut self.input_state);
        match state {
            InputState::PotentialDrag { node, .. } => {
                let id = self.model.nodes.get(node)?.id.clone();
                Some(CanvasEvent::NodeClicked(id))
            }
            InputState::Dragging { node, grab_offset } => {
                // Restore for release_drag to read the active node
                self.input_state = InputState::Dragging { node, grab_offset };
                self.release_drag();
                self.input_state = InputState::Idle;
                None
            }
            InputState::PotentialPan { .. } => {
                let sim_pos = CoordinateConverter::screen_to_sim(position, &self.viewport);
                match hit::edge_at(&self.model, sim_pos, self.viewport.zoom) {
                    Some(i) => {
                        let id = self.model.links[i].id.clone();
                        Some(CanvasEvent::EdgeClicked(id))
                    }
                    None => Some(CanvasEvent::BackgroundClicked),
                }
            }
            InputState::Panning { .. } => None,
            // Touch gestures resolve through handle_touch_end
            InputState::Idle | InputState::Pinching { .. } | InputState::TouchPending { .. } => {
                None
            }
        }
    }
}
