//! Rendering, split into a pure per-frame plan and the paint pass.
//!
//! `plan` resolves focus, dimming, layering, culling and label geometry
//! into a [`plan::FramePlan`] with no windowing dependencies beyond pixel
//! types, so the whole visual policy is unit-testable. `canvas` walks the
//! plan and issues the actual GPU paint calls.

pub mod canvas;
pub mod plan;

pub use plan::{EdgeLabel, EdgeShape, FramePlan, NodeShape, build_frame_plan};
