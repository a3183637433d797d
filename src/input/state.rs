//! Input state machine - unified state management for all interactions.
//!
//! A single explicit state machine instead of scattered boolean flags,
//! making impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> PotentialDrag   (pointer down on a node)
//! Idle -> PotentialPan    (pointer down on empty space)
//! Idle -> TouchPending    (one-finger touch start)
//! Idle -> Pinching        (two-finger touch start)
//!
//! PotentialDrag -> Dragging  (movement beyond DRAG_THRESHOLD; pins node)
//! PotentialPan  -> Panning   (movement beyond DRAG_THRESHOLD)
//! TouchPending  -> Panning   (movement beyond DRAG_THRESHOLD)
//! Pinching      -> Panning   (gesture drops to one finger)
//!
//! Any -> Idle             (pointer/touch up - resolves click vs. commit)
//! ```
//!
//! A click callback fires iff the pointer never left the threshold while
//! down; crossing it commits a node drag or viewport pan instead.

use gpui::{Pixels, Point};

/// What the pointer was over when a gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Node(usize),
    Edge(usize),
}

/// Unified input state for all pointer and touch interactions.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No active input operation
    Idle,

    /// Pointer down on a node, displacement still under the threshold
    PotentialDrag {
        /// Index of the node under the pointer
        node: usize,
        /// Pointer position at the down event
        start: Point<Pixels>,
        /// Simulation-space offset from node center to the pointer
        grab_offset: (f32, f32),
    },

    /// Node drag in progress; the node is pinned and the layout reheated
    Dragging {
        node: usize,
        grab_offset: (f32, f32),
    },

    /// Pointer down on empty space, displacement still under the threshold
    PotentialPan {
        start: Point<Pixels>,
        /// Viewport offset at the down event; pan applies cumulative delta
        offset_at_start: Point<Pixels>,
    },

    /// Viewport pan in progress
    Panning {
        start: Point<Pixels>,
        offset_at_start: Point<Pixels>,
    },

    /// Two-finger pinch zoom in progress
    Pinching {
        /// Finger distance at gesture start
        start_distance: f32,
        /// Midpoint at gesture start; the zoom anchor for the whole gesture
        start_midpoint: Point<Pixels>,
        /// Viewport snapshot at gesture start
        snapshot: crate::input::transform::Viewport,
    },

    /// One-finger touch whose outcome (tap vs. pan) is not yet known
    TouchPending {
        start: Point<Pixels>,
        /// Hit target captured at touch start, dispatched on a clean tap
        target: Option<HitTarget>,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching { .. })
    }

    /// Index of the node being dragged (or about to be), if any
    pub fn active_node(&self) -> Option<usize> {
        match self {
            Self::PotentialDrag { node, .. } | Self::Dragging { node, .. } => Some(*node),
            _ => None,
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Whether displacement between `start` and `current` crosses the
/// click-vs-drag threshold.
pub fn beyond_threshold(start: Point<Pixels>, current: Point<Pixels>, threshold: f32) -> bool {
    let dx = f32::from(current.x) - f32::from(start.x);
    let dy = f32::from(current.y) - f32::from(start.y);
    dx * dx + dy * dy >= threshold * threshold
}
