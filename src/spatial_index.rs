//! Spatial Index Module
//!
//! R-tree based spatial indexing over node discs for efficient hit testing.
//! Reduces candidate lookup from O(n) to O(log n) for point queries; the
//! caller still resolves z-order among candidates.

use crate::types::GraphModel;
use rstar::{AABB, RTree, RTreeObject};

/// A spatial entry covering one node's disc with its AABB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscEntry {
    pub node: usize,
    pub center: (f32, f32),
    pub radius: f32,
}

impl RTreeObject for DiscEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.center.0 - self.radius, self.center.1 - self.radius],
            [self.center.0 + self.radius, self.center.1 + self.radius],
        )
    }
}

/// R-tree over node discs, rebuilt lazily after simulation movement.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<DiscEntry>,
    dirty: bool,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            dirty: false,
        }
    }

    /// Mark the index stale; the next query against a model rebuilds it.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn rebuild(&mut self, model: &GraphModel) {
        crate::profile_scope!("spatial_index_rebuild");
        let entries: Vec<DiscEntry> = model
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| DiscEntry {
                node: i,
                center: n.effective_position(),
                radius: n.radius(),
            })
            .collect();
        self.tree = RTree::bulk_load(entries);
        self.dirty = false;
    }

    /// Rebuild if stale.
    pub fn ensure(&mut self, model: &GraphModel) {
        if self.dirty {
            self.rebuild(model);
        }
    }

    /// Rebuild if stale, then query.
    pub fn refresh_and_query(&mut self, model: &GraphModel, x: f32, y: f32) -> Vec<usize> {
        self.ensure(model);
        self.query_point(x, y)
    }

    /// Node indices whose disc AABB contains the point. Callers apply the
    /// exact disc test and z-order.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<usize> {
        let envelope = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.node)
            .collect()
    }
}
