//! Touch handling: tap, one-finger pan, two-finger pinch.
//!
//! A single touch starts as `TouchPending` with the hit target captured
//! immediately; a clean release dispatches that target as a click, while
//! crossing the threshold turns the gesture into a pan. A second finger
//! at any point snapshots the viewport and starts a pinch anchored at the
//! initial midpoint; dropping back to one finger continues as a pan.

use crate::canvas::{CanvasEvent, GraphCanvas};
use crate::constants::DRAG_THRESHOLD;
use crate::hit;
use crate::input::coords::CoordinateConverter;
use crate::input::state::{HitTarget, InputState, beyond_threshold};
use gpui::{Pixels, Point, point, px};

fn distance(a: Point<Pixels>, b: Point<Pixels>) -> f32 {
    let dx = f32::from(b.x) - f32::from(a.x);
    let dy = f32::from(b.y) - f32::from(a.y);
    (dx * dx + dy * dy).sqrt()
}

fn midpoint(a: Point<Pixels>, b: Point<Pixels>) -> Point<Pixels> {
    point(
        px((f32::from(a.x) + f32::from(b.x)) / 2.0),
        px((f32::from(a.y) + f32::from(b.y)) / 2.0),
    )
}

impl GraphCanvas {
    pub fn handle_touch_start(&mut self, touches: &[Point<Pixels>]) {
        match touches {
            [single] => {
                let sim_pos = CoordinateConverter::screen_to_sim(*single, &self.viewport);
                self.spatial.ensure(&self.model);
                let target = hit::node_at_indexed(&self.model, &self.spatial, sim_pos)
                    .map(HitTarget::Node)
                    .or_else(|| {
                        hit::edge_at(&self.model, sim_pos, self.viewport.zoom).map(HitTarget::Edge)
                    });
                self.input_state = InputState::TouchPending {
                    start: *single,
                    target,
                };
            }
            [a, b, ..] => {
                self.input_state = InputState::Pinching {
                    start_distance: distance(*a, *b).max(f32::EPSILON),
                    start_midpoint: midpoint(*a, *b),
                    snapshot: self.viewport,
                };
            }
            [] => {}
        }
    }

    pub fn handle_touch_move(&mut self, touches: &[Point<Pixels>]) -> bool {
        match (&self.input_state, touches) {
            (InputState::TouchPending { start, .. }, [single]) => {
                let start = *start;
                if beyond_threshold(start, *single, DRAG_THRESHOLD) {
                    self.input_state = InputState::Panning {
                        start: *single,
                        offset_at_start: self.viewport.offset,
                    };
                    return true;
                }
                false
            }
            (InputState::Panning { .. }, [single]) => self.handle_pointer_move(*single),
            (
                InputState::Pinching {
                    start_distance,
                    start_midpoint,
                    snapshot,
                },
                [a, b, ..],
            ) => {
                let ratio = distance(*a, *b) / start_distance;
                let (anchor, snapshot) = (*start_midpoint, *snapshot);
                self.viewport.apply_pinch(&snapshot, ratio, anchor);
                true
            }
            _ => false,
        }
    }

    pub fn handle_touch_end(&mut self, remaining: &[Point<Pixels>]) -> Option<CanvasEvent> {
        match (std::mem::take(&mut self.input_state), remaining) {
            // Clean tap dispatches the target captured at touch start
            (InputState::TouchPending { target, .. }, []) => Some(match target {
                Some(HitTarget::Node(i)) => {
                    CanvasEvent::NodeClicked(self.model.nodes.get(i)?.id.clone())
                }
                Some(HitTarget::Edge(i)) => {
                    CanvasEvent::EdgeClicked(self.model.links.get(i)?.id.clone())
                }
                None => CanvasEvent::BackgroundClicked,
            }),
            // Pinch dropping to one finger continues as a pan
            (InputState::Pinching { .. }, [single]) => {
                self.input_state = InputState::Panning {
                    start: *single,
                    offset_at_start: self.viewport.offset,
                };
                None
            }
            _ => None,
        }
    }
}
