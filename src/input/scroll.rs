//! Wheel handling: immediate zoom about the cursor.
//!
//! Every wheel event zooms, with no modifier gating; the cursor position
//! is the fixed-point anchor. The per-notch factor comes from
//! `WHEEL_ZOOM_STEP` raised to the (fractional) notch count so trackpad
//! scrolls with small deltas zoom proportionally.

use crate::canvas::GraphCanvas;
use crate::constants::WHEEL_ZOOM_STEP;
use gpui::{Pixels, Point};

impl GraphCanvas {
    /// `delta_y` is in wheel notches, positive away from the user.
    /// Returns whether the transform changed.
    pub fn handle_wheel(&mut self, delta_y: f32, position: Point<Pixels>) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let factor = WHEEL_ZOOM_STEP.powf(delta_y);
        self.viewport.zoom_around(factor, position)
    }
}
