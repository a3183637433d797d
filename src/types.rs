//! Core types for the graph canvas.
//!
//! Defines the generic input record supplied by the embedding application
//! and the internal node/link tables the engine lays out and renders.

use crate::constants::{ENTITY_NODE_RADIUS, EPISODE_NODE_RADIUS};
use gpui::Rgba;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Input Records
// ============================================================================

/// A generic graph element as supplied by the host application.
///
/// Elements with both `source` and `target` set are edge-like; everything
/// else is node-like. The adapter resolves labels, size tiers and colors
/// from the remaining fields.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GraphElement {
    /// Canonical id. Elements without one are dropped as malformed.
    pub id: Option<String>,
    /// Source node id; present on edge-like elements
    pub source: Option<String>,
    /// Target node id; present on edge-like elements
    pub target: Option<String>,
    /// Full label, highest priority for display
    pub label: Option<String>,
    /// Short label, used when no full label exists
    pub short_label: Option<String>,
    /// Display name, used when no label of either kind exists
    pub display_name: Option<String>,
    /// Element kind (e.g. `entity`, `episode`), drives tier and color
    pub kind: Option<String>,
    /// Free-form tag set; a `user` tag overrides the kind-based color
    pub tags: Vec<String>,
}

impl GraphElement {
    /// An element is edge-like iff both endpoints are non-null.
    pub fn is_edge_like(&self) -> bool {
        self.source.is_some() && self.target.is_some()
    }
}

// ============================================================================
// Size Tiers
// ============================================================================

/// Discrete node-size classification driving radius and label font size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeTier {
    /// Regular entity node
    Entity,
    /// Episode-like node, drawn larger
    Episode,
}

impl SizeTier {
    /// Disc radius at zoom 1.0
    pub fn radius(self) -> f32 {
        match self {
            Self::Entity => ENTITY_NODE_RADIUS,
            Self::Episode => EPISODE_NODE_RADIUS,
        }
    }
}

// ============================================================================
// Layout Records
// ============================================================================

/// Internal layout record for a graph vertex.
#[derive(Clone, Debug)]
pub struct ViewNode {
    pub id: String,
    pub label: String,
    pub size_tier: SizeTier,
    pub color: Rgba,
    /// Position in simulation space
    pub position: (f32, f32),
    /// Set only while the node is dragged; overrides simulation integration
    pub pinned_position: Option<(f32, f32)>,
}

impl ViewNode {
    pub fn radius(&self) -> f32 {
        self.size_tier.radius()
    }

    /// Position the simulation treats as authoritative this tick
    pub fn effective_position(&self) -> (f32, f32) {
        self.pinned_position.unwrap_or(self.position)
    }
}

/// Internal layout record for a graph edge.
///
/// `source` and `target` always name nodes present in the owning
/// [`GraphModel`]; the adapter guarantees this.
#[derive(Clone, Debug)]
pub struct ViewLink {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
}

// ============================================================================
// Graph Model
// ============================================================================

/// The node/link tables produced by the adapter and mutated by the layout
/// engine. Node order is insertion order; the renderer and hit-tester rely
/// on it for z-ordering (later nodes draw on top).
#[derive(Clone, Debug, Default)]
pub struct GraphModel {
    pub nodes: Vec<ViewNode>,
    pub links: Vec<ViewLink>,
    index: HashMap<String, usize>,
}

impl GraphModel {
    pub fn new(nodes: Vec<ViewNode>, links: Vec<ViewLink>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        Self { nodes, links, index }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&ViewNode> {
        self.node_index(id).map(|i| &self.nodes[i])
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut ViewNode> {
        let i = self.node_index(id)?;
        Some(&mut self.nodes[i])
    }

    /// Index of the link with the given id, used for focus resolution
    pub fn link_index(&self, id: &str) -> Option<usize> {
        self.links.iter().position(|l| l.id == id)
    }

    /// Ids of nodes directly linked to `id` (either direction)
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        let mut out = Vec::new();
        for link in &self.links {
            if link.source == id {
                out.push(link.target.as_str());
            } else if link.target == id {
                out.push(link.source.as_str());
            }
        }
        out
    }
}
