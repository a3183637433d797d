//! Input handling, split by event kind.
//!
//! Each handler file holds one `impl GraphCanvas` block for its event.
//! Handlers take plain positions rather than windowing-toolkit event
//! structs so every transition is unit-testable; the view shell unpacks
//! gpui events into these calls.

pub mod coords;
pub mod pointer_down;
pub mod pointer_move;
pub mod pointer_up;
pub mod scroll;
pub mod state;
pub mod touch;
pub mod transform;

pub use coords::CoordinateConverter;
pub use state::{HitTarget, InputState};
pub use transform::Viewport;
