//! Test helpers and builders for reducing boilerplate in tests.

use gpui::{px, size};
use graphboard::{GraphCanvas, GraphElement};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary; respects RUST_LOG.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn node(id: &str) -> GraphElement {
    GraphElement {
        id: Some(id.to_string()),
        label: Some(id.to_string()),
        ..Default::default()
    }
}

pub fn labeled_node(id: &str, label: &str) -> GraphElement {
    GraphElement {
        id: Some(id.to_string()),
        label: Some(label.to_string()),
        ..Default::default()
    }
}

pub fn episode_node(id: &str) -> GraphElement {
    GraphElement {
        id: Some(id.to_string()),
        label: Some(id.to_string()),
        kind: Some("episode".to_string()),
        ..Default::default()
    }
}

pub fn edge(id: &str, source: &str, target: &str, label: &str) -> GraphElement {
    GraphElement {
        id: Some(id.to_string()),
        source: Some(source.to_string()),
        target: Some(target.to_string()),
        label: Some(label.to_string()),
        ..Default::default()
    }
}

/// Builder for a canvas with a laid-out container and hand-placed nodes.
///
/// Positions given through [`TestGraphBuilder::with_node_at`] are applied
/// after the initial layout so tests get deterministic geometry.
pub struct TestGraphBuilder {
    elements: Vec<GraphElement>,
    positions: Vec<(String, (f32, f32))>,
    container: (f32, f32),
    center: Option<String>,
}

impl Default for TestGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGraphBuilder {
    pub fn new() -> Self {
        init_tracing();
        Self {
            elements: Vec::new(),
            positions: Vec::new(),
            container: (800.0, 600.0),
            center: None,
        }
    }

    pub fn with_node(mut self, id: &str) -> Self {
        self.elements.push(node(id));
        self
    }

    pub fn with_node_at(mut self, id: &str, pos: (f32, f32)) -> Self {
        self.elements.push(node(id));
        self.positions.push((id.to_string(), pos));
        self
    }

    pub fn with_element(mut self, element: GraphElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_edge(mut self, id: &str, source: &str, target: &str) -> Self {
        self.elements.push(edge(id, source, target, id));
        self
    }

    pub fn with_container(mut self, width: f32, height: f32) -> Self {
        self.container = (width, height);
        self
    }

    pub fn with_center(mut self, id: &str) -> Self {
        self.center = Some(id.to_string());
        self
    }

    pub fn build(self) -> GraphCanvas {
        let mut canvas = GraphCanvas::new();
        canvas.set_container_size(size(px(self.container.0), px(self.container.1)));
        canvas.set_elements(&self.elements, self.center.as_deref());
        for (id, pos) in &self.positions {
            if let Some(node) = canvas.model.node_mut(id) {
                node.position = *pos;
            }
        }
        canvas
    }
}
