//! The imperative graph canvas engine.
//!
//! [`GraphCanvas`] owns the node/link model, the force simulation, the
//! viewport transform and all cross-frame interaction state (hover, drag,
//! pan, pinch). It is mutated only inside event handlers and the tick, and
//! read-only during draw - the explicit state record that keeps per-frame
//! pointer traffic out of any reactive state tree. [`crate::view::GraphView`]
//! wraps it as a thin gpui shell.
//!
//! Input handlers live beside their event kind in `input::pointer_down`,
//! `input::pointer_move`, `input::pointer_up` and `input::touch`.

use crate::adapter;
use crate::input::state::InputState;
use crate::input::transform::Viewport;
use crate::layout::ForceSimulation;
use crate::spatial_index::SpatialIndex;
use crate::types::{GraphElement, GraphModel};
use gpui::{Pixels, Size, px, size};
use std::collections::HashSet;
use tracing::debug;

/// Interaction outcome the embedding application observes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanvasEvent {
    NodeClicked(String),
    EdgeClicked(String),
    BackgroundClicked,
}

pub struct GraphCanvas {
    pub model: GraphModel,
    pub(crate) sim: ForceSimulation,
    pub viewport: Viewport,
    pub input_state: InputState,

    // Transient interaction state, reset on rebuild
    pub hovered_node: Option<usize>,
    pub hovered_edge: Option<usize>,

    // Caller-owned selection/highlight props, mirrored for rendering
    pub selected_node_id: Option<String>,
    pub selected_edge_id: Option<String>,
    pub highlighted_node_ids: HashSet<String>,

    pub(crate) spatial: SpatialIndex,
    container: Size<Pixels>,
    /// Center request deferred until the container has positive dimensions
    pending_center: Option<String>,
    /// Initial layout deferred for the same reason
    needs_initial_layout: bool,
}

impl Default for GraphCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphCanvas {
    pub fn new() -> Self {
        let mut model = GraphModel::default();
        let sim = ForceSimulation::seed(&mut model);
        Self {
            model,
            sim,
            viewport: Viewport::default(),
            input_state: InputState::Idle,
            hovered_node: None,
            hovered_edge: None,
            selected_node_id: None,
            selected_edge_id: None,
            highlighted_node_ids: HashSet::new(),
            spatial: SpatialIndex::new(),
            container: size(px(0.0), px(0.0)),
            pending_center: None,
            needs_initial_layout: false,
        }
    }

    // ========================================================================
    // Structural rebuild & props
    // ========================================================================

    /// Replace the element list wholesale.
    ///
    /// Interaction state (hover, drag, pan) resets; the viewport persists
    /// unless `center_node_id` names a node to center on. With a zero-area
    /// container both layout and centering are deferred until dimensions
    /// arrive.
    pub fn set_elements(&mut self, elements: &[GraphElement], center_node_id: Option<&str>) {
        self.model = adapter::build_model(elements);
        self.sim = ForceSimulation::seed(&mut self.model);
        self.input_state.reset();
        self.hovered_node = None;
        self.hovered_edge = None;
        self.spatial.invalidate();
        self.pending_center = center_node_id.map(str::to_string);
        debug!(
            nodes = self.model.nodes.len(),
            links = self.model.links.len(),
            "rebuilt graph model"
        );

        if self.has_layout_space() {
            self.run_deferred_layout();
        } else {
            self.needs_initial_layout = true;
        }
    }

    /// Remove all content and stop the simulation (data source removed).
    pub fn clear(&mut self) {
        self.set_elements(&[], None);
    }

    pub fn container_size(&self) -> Size<Pixels> {
        self.container
    }

    /// True once the container has positive dimensions; draw and layout
    /// are skipped entirely until then.
    pub fn has_layout_space(&self) -> bool {
        self.container.width > px(0.0) && self.container.height > px(0.0)
    }

    /// Record the container size observed by the shell; runs any deferred
    /// initial layout once dimensions become positive.
    pub fn set_container_size(&mut self, new_size: Size<Pixels>) {
        if self.container == new_size {
            return;
        }
        self.container = new_size;
        if self.has_layout_space() && self.needs_initial_layout {
            self.run_deferred_layout();
        }
    }

    fn run_deferred_layout(&mut self) {
        self.needs_initial_layout = false;
        self.sim.run_initial(&mut self.model);
        self.spatial.invalidate();
        if let Some(id) = self.pending_center.take() {
            self.center_on_node(&id);
        }
    }

    /// Pan so the named node sits at the container center. Returns whether
    /// the node exists; the viewport is untouched otherwise.
    pub fn center_on_node(&mut self, id: &str) -> bool {
        let Some(node) = self.model.node(id) else {
            debug!(id, "center-on-node target absent");
            return false;
        };
        let pos = node.effective_position();
        self.viewport.center_on(pos, self.container);
        true
    }

    // ========================================================================
    // Tick loop
    // ========================================================================

    /// Advance the simulation one step if it is active.
    ///
    /// Returns true when a redraw should be scheduled; the shell requests
    /// at most one animation frame per tick, so redraws coalesce to one
    /// per frame no matter how many input events fired in between.
    pub fn tick(&mut self) -> bool {
        if !self.sim.is_active() || !self.has_layout_space() {
            return false;
        }
        self.sim.step(&mut self.model);
        self.spatial.invalidate();
        true
    }

    /// Whether the tick loop has pending work.
    pub fn simulation_active(&self) -> bool {
        self.sim.is_active()
    }

    // ========================================================================
    // Interaction queries shared by the handlers
    // ========================================================================

    /// Hovered-or-selected node id used for focus resolution.
    pub fn hovered_node_id(&self) -> Option<&str> {
        self.hovered_node.map(|i| self.model.nodes[i].id.as_str())
    }

    pub fn hovered_edge_id(&self) -> Option<&str> {
        self.hovered_edge.map(|i| self.model.links[i].id.as_str())
    }

    /// Unpin whichever node is currently dragged, leaving it at its
    /// current position as the new rest position.
    pub(crate) fn release_drag(&mut self) {
        if let Some(i) = self.input_state.active_node() {
            if let Some(pin) = self.model.nodes[i].pinned_position.take() {
                self.model.nodes[i].position = pin;
                self.spatial.invalidate();
            }
        }
    }
}
