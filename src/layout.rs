//! Force-directed layout engine.
//!
//! A classic iterative spring/repulsion model with a geometric cooling
//! schedule: spring forces along links, pairwise charge repulsion, a weak
//! pull toward the extent midpoint, and a collision pass keeping node discs
//! apart. The initial layout runs synchronously with a bounded iteration
//! count; afterwards the simulation only runs while reheated (drag).
//!
//! ## Performance Notes
//!
//! One `step` is O(n²) in the repulsion and collision passes, which is fine
//! for the graph sizes a knowledge-graph panel shows. The synchronous
//! initial loop is capped at [`MAX_INITIAL_TICKS`] so pathological graphs
//! cannot block the UI thread unboundedly.

use crate::constants::{
    ALPHA_DECAY, ALPHA_MIN, CENTER_STRENGTH, CHARGE_STRENGTH, COLLISION_PADDING, EXTENT_HEIGHT,
    EXTENT_WIDTH, MAX_INITIAL_TICKS, REHEAT_ALPHA, SEED_SPACING, SPRING_LENGTH, SPRING_STIFFNESS,
    VELOCITY_RETENTION,
};
use crate::types::GraphModel;
use tracing::debug;

/// Golden angle in radians, used by the deterministic seed spiral.
const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Owns the cooling state and per-node velocities for one [`GraphModel`].
///
/// Positions live on the model's nodes; the simulation reads and writes
/// them in place so the renderer and hit-tester always see current data.
pub struct ForceSimulation {
    alpha: f32,
    velocities: Vec<(f32, f32)>,
}

impl ForceSimulation {
    /// Seed deterministic initial positions and prepare velocities.
    ///
    /// Placement is a golden-angle spiral around the extent center with
    /// radius growing as √index: spatially even, collision-free for the
    /// first simulation pass, and reproducible for identical input.
    pub fn seed(model: &mut GraphModel) -> Self {
        let center = (EXTENT_WIDTH / 2.0, EXTENT_HEIGHT / 2.0);
        for (i, node) in model.nodes.iter_mut().enumerate() {
            let angle = i as f32 * GOLDEN_ANGLE;
            let radius = SEED_SPACING * (i as f32).sqrt();
            node.position = (
                center.0 + radius * angle.cos(),
                center.1 + radius * angle.sin(),
            );
            node.pinned_position = None;
        }
        let mut sim = Self {
            alpha: 1.0,
            velocities: vec![(0.0, 0.0); model.nodes.len()],
        };
        sim.clamp_to_extent(model);
        sim
    }

    /// Whether the tick loop still has work to do.
    pub fn is_active(&self) -> bool {
        self.alpha >= ALPHA_MIN
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Raise alpha back to drag temperature so ticks resume.
    pub fn reheat(&mut self) {
        self.alpha = self.alpha.max(REHEAT_ALPHA);
    }

    /// Run the synchronous initial layout until convergence or the
    /// iteration cap, then record rest positions clamped into the extent.
    pub fn run_initial(&mut self, model: &mut GraphModel) {
        crate::profile_scope!("layout_initial");
        let mut ticks = 0;
        while self.is_active() && ticks < MAX_INITIAL_TICKS {
            self.step(model);
            ticks += 1;
        }
        debug!(ticks, alpha = self.alpha, "initial layout settled");
    }

    /// Advance the simulation by one tick.
    ///
    /// A pinned node still exerts forces on its neighbors, but its own
    /// integration is overridden by the pin. Every tick ends with all
    /// positions clamped into the logical extent.
    pub fn step(&mut self, model: &mut GraphModel) {
        crate::profile_scope!("layout_step");
        let n = model.nodes.len();
        if n == 0 {
            self.alpha = 0.0;
            return;
        }
        if self.velocities.len() != n {
            self.velocities = vec![(0.0, 0.0); n];
        }

        let positions: Vec<(f32, f32)> =
            model.nodes.iter().map(|nd| nd.effective_position()).collect();
        let radii: Vec<f32> = model.nodes.iter().map(|nd| nd.radius()).collect();
        let mut forces = vec![(0.0f32, 0.0f32); n];

        // Pairwise charge repulsion
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = safe_delta(positions[i], positions[j]);
                let d2 = dx * dx + dy * dy;
                let inv = CHARGE_STRENGTH / d2;
                let fx = dx * inv / d2.sqrt();
                let fy = dy * inv / d2.sqrt();
                forces[i].0 -= fx;
                forces[i].1 -= fy;
                forces[j].0 += fx;
                forces[j].1 += fy;
            }
        }

        // Spring force along links toward the rest length
        for link in &model.links {
            let (Some(i), Some(j)) = (
                model.node_index(&link.source),
                model.node_index(&link.target),
            ) else {
                continue;
            };
            let (dx, dy) = safe_delta(positions[i], positions[j]);
            let dist = (dx * dx + dy * dy).sqrt();
            let stretch = (dist - SPRING_LENGTH) * SPRING_STIFFNESS;
            let fx = dx / dist * stretch;
            let fy = dy / dist * stretch;
            forces[i].0 += fx;
            forces[i].1 += fy;
            forces[j].0 -= fx;
            forces[j].1 -= fy;
        }

        // Weak centering pull
        let center = (EXTENT_WIDTH / 2.0, EXTENT_HEIGHT / 2.0);
        for i in 0..n {
            forces[i].0 += (center.0 - positions[i].0) * CENTER_STRENGTH;
            forces[i].1 += (center.1 - positions[i].1) * CENTER_STRENGTH;
        }

        // Collision: push overlapping discs apart
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = safe_delta(positions[i], positions[j]);
                let dist = (dx * dx + dy * dy).sqrt();
                let min_dist = radii[i] + radii[j] + COLLISION_PADDING;
                if dist < min_dist {
                    let push = (min_dist - dist) * 0.5;
                    let fx = dx / dist * push;
                    let fy = dy / dist * push;
                    forces[i].0 -= fx;
                    forces[i].1 -= fy;
                    forces[j].0 += fx;
                    forces[j].1 += fy;
                }
            }
        }

        // Integrate with damping, scaled by the cooling alpha
        for (i, node) in model.nodes.iter_mut().enumerate() {
            if let Some(pin) = node.pinned_position {
                node.position = pin;
                self.velocities[i] = (0.0, 0.0);
                continue;
            }
            let v = &mut self.velocities[i];
            v.0 = (v.0 + forces[i].0 * self.alpha) * VELOCITY_RETENTION;
            v.1 = (v.1 + forces[i].1 * self.alpha) * VELOCITY_RETENTION;
            node.position.0 += v.0;
            node.position.1 += v.1;
        }

        self.clamp_to_extent(model);
        self.alpha *= 1.0 - ALPHA_DECAY;
    }

    /// Clamp every node into `[r, extent - r]` on both axes. Applies to
    /// pinned positions too so drags cannot escape the extent.
    fn clamp_to_extent(&self, model: &mut GraphModel) {
        for node in &mut model.nodes {
            let r = node.radius();
            node.position.0 = node.position.0.clamp(r, EXTENT_WIDTH - r);
            node.position.1 = node.position.1.clamp(r, EXTENT_HEIGHT - r);
            if let Some(pin) = &mut node.pinned_position {
                pin.0 = pin.0.clamp(r, EXTENT_WIDTH - r);
                pin.1 = pin.1.clamp(r, EXTENT_HEIGHT - r);
            }
        }
    }
}

/// Delta from `a` to `b`, nudged off zero so force math never divides by
/// zero when two nodes coincide. The nudge direction is fixed, keeping the
/// simulation deterministic.
fn safe_delta(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    if dx.abs() < f32::EPSILON && dy.abs() < f32::EPSILON {
        (0.01, 0.01)
    } else {
        (dx, dy)
    }
}
