//! Coordinate conversion utilities for canvas interactions.
//!
//! Centralizes the screen↔simulation conversion formulas so input handling
//! and rendering never duplicate them. All math is in logical pixels; the
//! device scale factor is gpui's concern at the drawing-surface boundary.

use crate::input::transform::Viewport;
use gpui::{Pixels, Point, point, px};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to simulation space.
    #[inline]
    pub fn screen_to_sim(screen_pos: Point<Pixels>, viewport: &Viewport) -> (f32, f32) {
        (
            (f32::from(screen_pos.x) - f32::from(viewport.offset.x)) / viewport.zoom,
            (f32::from(screen_pos.y) - f32::from(viewport.offset.y)) / viewport.zoom,
        )
    }

    /// Convert a simulation-space position to screen space.
    #[inline]
    pub fn sim_to_screen(sim_pos: (f32, f32), viewport: &Viewport) -> Point<Pixels> {
        point(
            px(sim_pos.0 * viewport.zoom + f32::from(viewport.offset.x)),
            px(sim_pos.1 * viewport.zoom + f32::from(viewport.offset.y)),
        )
    }

    /// Convert a screen-space delta to simulation space (for drags).
    #[inline]
    pub fn delta_screen_to_sim(delta: Point<Pixels>, zoom: f32) -> (f32, f32) {
        (f32::from(delta.x) / zoom, f32::from(delta.y) / zoom)
    }
}
