//! Multi-component workflow tests.
//!
//! These drive the engine through its public event entry points the way
//! the view shell would, and check the resulting model, viewport and
//! frame-plan state.

mod interaction_tests;
mod rendering_tests;
