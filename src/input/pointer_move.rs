//! Pointer-move handling: threshold promotion, drag, pan, hover.
//!
//! Crossing `DRAG_THRESHOLD` promotes an armed gesture: a potential drag
//! pins its node and reheats the simulation, a potential pan starts moving
//! the viewport. In `Idle` the move only refreshes hover. The return value
//! says whether a redraw is warranted.

use crate::canvas::GraphCanvas;
use crate::constants::DRAG_THRESHOLD;
use crate::hit;
use crate::input::coords::CoordinateConverter;
use crate::input::state::{InputState, beyond_threshold};
use gpui::{Pixels, Point, point};

impl GraphCanvas {
    pub fn handle_pointer_move(&mut self, position: Point<Pixels>) -> bool {
        match self.input_state {
            InputState::PotentialDrag {
                node,
                start,
                grab_offset,
            } => {
                if beyond_threshold(start, position, DRAG_THRESHOLD) {
                    self.input_state = InputState::Dragging { node, grab_offset };
                    self.sim.reheat();
                    self.drag_node_to(node, grab_offset, position);
                    return true;
                }
                false
            }
            InputState::Dragging { node, grab_offset } => {
                self.drag_node_to(node, grab_offset, position);
                true
            }
            InputState::PotentialPan {
                start,
                offset_at_start,
            } => {
                if beyond_threshold(start, position, DRAG_THRESHOLD) {
                    self.input_state = InputState::Panning {
                        start,
                        offset_at_start,
                    };
                    self.pan_to(start, offset_at_start, position);
                    return true;
                }
                false
            }
            InputState::Panning {
                start,
                offset_at_start,
            } => {
                self.pan_to(start, offset_at_start, position);
                true
            }
            InputState::Idle => self.update_hover(position),
            // Touch gestures are driven by the touch handlers
            InputState::Pinching { .. } | InputState::TouchPending { .. } => false,
        }
    }

    /// Clear hover when the pointer leaves the canvas. Any armed or
    /// committed gesture stays live; only hover is affected.
    pub fn handle_pointer_leave(&mut self) -> bool {
        let changed = self.hovered_node.is_some() || self.hovered_edge.is_some();
        self.hovered_node = None;
        self.hovered_edge = None;
        changed
    }

    /// Move the dragged node's pin so the grab point follows the pointer.
    fn drag_node_to(&mut self, node: usize, grab_offset: (f32, f32), position: Point<Pixels>) {
        let sim_pos = CoordinateConverter::screen_to_sim(position, &self.viewport);
        let pinned = (sim_pos.0 - grab_offset.0, sim_pos.1 - grab_offset.1);
        if let Some(n) = self.model.nodes.get_mut(node) {
            n.pinned_position = Some(pinned);
        }
        self.spatial.invalidate();
    }

    /// Pan is cumulative from the gesture start, not incremental, so a
    /// missed intermediate event cannot accumulate error.
    fn pan_to(
        &mut self,
        start: Point<Pixels>,
        offset_at_start: Point<Pixels>,
        position: Point<Pixels>,
    ) {
        self.viewport.offset = point(
            offset_at_start.x + (position.x - start.x),
            offset_at_start.y + (position.y - start.y),
        );
    }

    fn update_hover(&mut self, position: Point<Pixels>) -> bool {
        let sim_pos = CoordinateConverter::screen_to_sim(position, &self.viewport);
        self.spatial.ensure(&self.model);
        let node = hit::node_at_indexed(&self.model, &self.spatial, sim_pos);
        let edge = if node.is_none() {
            hit::edge_at(&self.model, sim_pos, self.viewport.zoom)
        } else {
            None
        };
        let changed = node != self.hovered_node || edge != self.hovered_edge;
        self.hovered_node = node;
        self.hovered_edge = edge;
        changed
    }
}
