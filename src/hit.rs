//! Hit testing in simulation space.
//!
//! Pointer coordinates are converted through the inverse viewport transform
//! before these run; both tests are pure functions of current node/link
//! positions plus the zoom (which scales the pixel tolerance for edges).

use crate::constants::{EDGE_HIT_TOLERANCE, MIN_SEGMENT_LENGTH};
use crate::spatial_index::SpatialIndex;
use crate::types::GraphModel;

/// Topmost node whose disc contains `p`, or None.
///
/// Later table entries draw on top, so candidates are scanned in reverse
/// table order and the first hit wins.
pub fn node_at(model: &GraphModel, p: (f32, f32)) -> Option<usize> {
    for (i, node) in model.nodes.iter().enumerate().rev() {
        let (x, y) = node.effective_position();
        let dx = p.0 - x;
        let dy = p.1 - y;
        let r = node.radius();
        if dx * dx + dy * dy <= r * r {
            return Some(i);
        }
    }
    None
}

/// [`node_at`] narrowed through the R-tree first: the index returns the
/// candidate set, the reverse-order scan picks the topmost among them.
pub fn node_at_indexed(model: &GraphModel, index: &SpatialIndex, p: (f32, f32)) -> Option<usize> {
    crate::profile_scope!("hit_test_nodes");
    let candidates = index.query_point(p.0, p.1);
    if candidates.is_empty() {
        return None;
    }
    for (i, node) in model.nodes.iter().enumerate().rev() {
        if !candidates.contains(&i) {
            continue;
        }
        let (x, y) = node.effective_position();
        let dx = p.0 - x;
        let dy = p.1 - y;
        let r = node.radius();
        if dx * dx + dy * dy <= r * r {
            return Some(i);
        }
    }
    None
}

/// Closest link within the pixel tolerance (scaled into sim units by
/// `zoom`), or None. Distance is to the clamped segment, not the infinite
/// line.
pub fn edge_at(model: &GraphModel, p: (f32, f32), zoom: f32) -> Option<usize> {
    crate::profile_scope!("hit_test_edges");
    let tolerance = EDGE_HIT_TOLERANCE / zoom.max(f32::EPSILON);
    let mut best: Option<(usize, f32)> = None;
    for (i, link) in model.links.iter().enumerate() {
        let (Some(a), Some(b)) = (model.node(&link.source), model.node(&link.target)) else {
            continue;
        };
        let dist = segment_distance(p, a.effective_position(), b.effective_position());
        if dist <= tolerance && best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

/// Distance from `p` to segment `ab`, with the projection parameter
/// clamped to `[0, 1]`. Degenerate segments shorter than the epsilon fall
/// back to point distance.
pub fn segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let abx = b.0 - a.0;
    let aby = b.1 - a.1;
    let len2 = abx * abx + aby * aby;
    if len2 < MIN_SEGMENT_LENGTH * MIN_SEGMENT_LENGTH {
        let dx = p.0 - a.0;
        let dy = p.1 - a.1;
        return (dx * dx + dy * dy).sqrt();
    }
    let t = (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / len2).clamp(0.0, 1.0);
    let cx = a.0 + t * abx;
    let cy = a.1 + t * aby;
    let dx = p.0 - cx;
    let dy = p.1 - cy;
    (dx * dx + dy * dy).sqrt()
}
