//! Force-directed knowledge-graph canvas for gpui.
//!
//! Turns generic graph records into an interactive node-link view: a
//! bounded force layout with drag reheating, pan/zoom/pinch viewport
//! control, hover/selection focus dimming, and click callbacks for the
//! embedding application.
//!
//! ## Architecture
//!
//! - [`adapter`] - raw elements to node/link tables
//! - [`layout`] - the force simulation and alpha cooling
//! - [`canvas`] - the imperative engine holding all interaction state
//! - [`input`] - viewport transform plus pointer/touch/wheel handlers
//! - [`hit`] / [`spatial_index`] - simulation-space hit testing
//! - [`render`] - per-frame plan building and the GPU paint pass
//! - [`view`] - the gpui entity wrapping the engine

pub mod adapter;
pub mod canvas;
pub mod constants;
pub mod hit;
pub mod input;
pub mod layout;
pub mod perf;
pub mod render;
pub mod spatial_index;
pub mod types;
pub mod view;

pub use adapter::{AdapterError, build_model, elements_from_json};
pub use canvas::{CanvasEvent, GraphCanvas};
pub use input::{CoordinateConverter, InputState, Viewport};
pub use types::{GraphElement, GraphModel, SizeTier, ViewLink, ViewNode};
pub use view::GraphView;
