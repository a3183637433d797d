//! Viewport transform - pan, zoom, and the fixed-point zoom solve.
//!
//! The mapping is `screen = sim * zoom + offset`. Zooming around an anchor
//! keeps the simulation point under that anchor stationary on screen by
//! solving for the new offset after the scale change.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::input::coords::CoordinateConverter;
use gpui::{Pixels, Point, Size, point, px};

/// Pan/zoom state mapping simulation space to screen pixels.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Pan offset in screen pixels
    pub offset: Point<Pixels>,
    /// Scale factor, clamped to `[MIN_ZOOM, MAX_ZOOM]`
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: point(px(0.0), px(0.0)),
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Multiply zoom by `factor`, keeping the simulation point under
    /// `anchor` fixed on screen. Returns false when clamping left the
    /// transform unchanged.
    pub fn zoom_around(&mut self, factor: f32, anchor: Point<Pixels>) -> bool {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < 1e-6 {
            return false;
        }
        let sim_anchor = CoordinateConverter::screen_to_sim(anchor, self);
        self.zoom = new_zoom;
        self.offset = point(
            anchor.x - px(sim_anchor.0 * new_zoom),
            anchor.y - px(sim_anchor.1 * new_zoom),
        );
        true
    }

    /// Set zoom and offset directly from a pinch snapshot: the gesture's
    /// initial midpoint stays anchored while zoom follows the finger
    /// distance ratio against the snapshotted transform.
    pub fn apply_pinch(&mut self, snapshot: &Viewport, ratio: f32, anchor: Point<Pixels>) {
        let new_zoom = (snapshot.zoom * ratio).clamp(MIN_ZOOM, MAX_ZOOM);
        let sim_anchor = CoordinateConverter::screen_to_sim(anchor, snapshot);
        self.zoom = new_zoom;
        self.offset = point(
            anchor.x - px(sim_anchor.0 * new_zoom),
            anchor.y - px(sim_anchor.1 * new_zoom),
        );
    }

    /// Pan so that `sim_pos` maps to the center of `container` at the
    /// current zoom.
    pub fn center_on(&mut self, sim_pos: (f32, f32), container: Size<Pixels>) {
        self.offset = point(
            container.width / 2.0 - px(sim_pos.0 * self.zoom),
            container.height / 2.0 - px(sim_pos.1 * self.zoom),
        );
    }

    /// Translate the offset by a screen-space delta.
    pub fn pan_by(&mut self, delta: Point<Pixels>) {
        self.offset = point(self.offset.x + delta.x, self.offset.y + delta.y);
    }
}
