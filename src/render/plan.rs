//! Per-frame render plan: focus, dimming, layering, label geometry.
//!
//! [`build_frame_plan`] turns the canvas state into an ordered set of
//! shape lists, one per draw layer, back to front:
//!
//! 1. dimmed edges, 2. dimmed nodes (with labels), 3. dimmed edge labels,
//! 4. normal edges, 5. focus edges, 6. active edges, 7. non-dimmed nodes
//! (with labels), 8. normal edge labels, 9. focus edge labels (capped),
//! 10. active edge labels.
//!
//! Focus resolution: hover beats selection, node focus beats edge focus.
//! A focused node pulls itself and its direct neighbors into the focus
//! set; a focused edge pulls in its two endpoints. While any focus exists,
//! everything outside the set is dimmed by an RGB multiply.

use crate::canvas::GraphCanvas;
use crate::constants::{
    ACTIVE_EDGE_STROKE_WIDTH, CULLING_MARGIN, DIM_FACTOR, EDGE_COLOR, EDGE_LABEL_COLOR,
    EDGE_LABEL_FONT_SIZE, EDGE_LABEL_OFFSET, EDGE_STROKE_WIDTH, FOCUS_LABEL_FONT_BUMP,
    GLYPH_WIDTH_RATIO, HIGHLIGHT_RING_COLOR, MAX_FOCUS_EDGE_LABELS, MIN_SEGMENT_LENGTH,
    NODE_LABEL_COLOR, NODE_LABEL_FONT_SIZE, NODE_LABEL_MAX_WIDTH, color,
};
use crate::input::coords::CoordinateConverter;
use crate::types::ViewLink;
use gpui::{Pixels, Point, Rgba, point, px};
use std::collections::HashSet;
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Debug)]
pub struct EdgeShape {
    pub link: usize,
    pub from: Point<Pixels>,
    pub to: Point<Pixels>,
    pub color: Rgba,
    pub stroke_width: Pixels,
}

#[derive(Clone, Debug)]
pub struct LabelShape {
    pub text: String,
    /// Top-left corner; the estimated text width is already centered out
    pub origin: Point<Pixels>,
    pub font_size: Pixels,
    pub color: Rgba,
}

#[derive(Clone, Debug)]
pub struct NodeShape {
    pub node: usize,
    pub center: Point<Pixels>,
    pub radius: Pixels,
    pub color: Rgba,
    pub highlight_ring: Option<Rgba>,
    pub label: Option<LabelShape>,
}

#[derive(Clone, Debug)]
pub struct EdgeLabel {
    pub link: usize,
    pub text: String,
    /// Label anchor, offset perpendicularly from the segment midpoint
    pub anchor: Point<Pixels>,
    /// Rotation in radians, folded into `(-pi/2, pi/2]` to stay upright
    pub angle: f32,
    pub font_size: Pixels,
    pub color: Rgba,
}

impl EdgeLabel {
    /// Top-left corner of the unrotated text box: centered on the anchor,
    /// then pushed along the segment's perpendicular by half the rotated
    /// box's projected extent, so the box clears steep segments too.
    pub fn origin(&self) -> Point<Pixels> {
        let font = f32::from(self.font_size);
        let width = self.text.chars().count() as f32 * font * GLYPH_WIDTH_RATIO;
        let clearance = (width * self.angle.sin().abs() + font * self.angle.cos().abs()) / 2.0;
        let center_x = f32::from(self.anchor.x) + self.angle.sin() * clearance;
        let center_y = f32::from(self.anchor.y) - self.angle.cos() * clearance;
        point(px(center_x - width / 2.0), px(center_y - font / 2.0))
    }
}

/// One frame's draw lists, field order matching draw order.
#[derive(Default)]
pub struct FramePlan {
    pub dimmed_edges: Vec<EdgeShape>,
    pub dimmed_nodes: Vec<NodeShape>,
    pub dimmed_edge_labels: Vec<EdgeLabel>,
    pub normal_edges: Vec<EdgeShape>,
    pub focus_edges: Vec<EdgeShape>,
    pub active_edges: Vec<EdgeShape>,
    pub nodes: Vec<NodeShape>,
    pub normal_edge_labels: Vec<EdgeLabel>,
    pub focus_edge_labels: Vec<EdgeLabel>,
    pub active_edge_labels: Vec<EdgeLabel>,
}

/// Focus resolved for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Focus {
    None,
    Node(usize),
    Edge(usize),
}

fn resolve_focus(canvas: &GraphCanvas) -> Focus {
    let selected_node = canvas
        .selected_node_id
        .as_deref()
        .and_then(|id| canvas.model.node_index(id));
    if let Some(node) = canvas.hovered_node.or(selected_node) {
        return Focus::Node(node);
    }
    let selected_edge = canvas
        .selected_edge_id
        .as_deref()
        .and_then(|id| canvas.model.link_index(id));
    if let Some(edge) = canvas.hovered_edge.or(selected_edge) {
        return Focus::Edge(edge);
    }
    Focus::None
}

/// Node indices emphasized by the current focus.
fn focus_node_set(canvas: &GraphCanvas, focus: &Focus) -> HashSet<usize> {
    let model = &canvas.model;
    let mut set = HashSet::new();
    match focus {
        Focus::None => {}
        Focus::Node(i) => {
            set.insert(*i);
            let id = &model.nodes[*i].id;
            for link in &model.links {
                if link.source == *id {
                    set.extend(model.node_index(&link.target));
                } else if link.target == *id {
                    set.extend(model.node_index(&link.source));
                }
            }
        }
        Focus::Edge(i) => {
            let link = &model.links[*i];
            set.extend(model.node_index(&link.source));
            set.extend(model.node_index(&link.target));
        }
    }
    set
}

fn dim(c: Rgba) -> Rgba {
    Rgba {
        r: c.r * DIM_FACTOR,
        g: c.g * DIM_FACTOR,
        b: c.b * DIM_FACTOR,
        a: c.a,
    }
}

/// Ellipsis truncation against the label width budget. The focused node
/// skips this and renders its full label.
fn truncate_label(text: &str, font_size: f32) -> String {
    let max_chars = (NODE_LABEL_MAX_WIDTH / (font_size * GLYPH_WIDTH_RATIO)).floor() as usize;
    if text.chars().count() <= max_chars.max(1) {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

/// Angle of `a -> b` folded into `(-pi/2, pi/2]`, plus the label anchor
/// offset perpendicularly above the segment midpoint. Segments shorter
/// than the epsilon get a zero angle instead of dividing by zero.
fn edge_label_geometry(a: (f32, f32), b: (f32, f32)) -> (f32, (f32, f32)) {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let mid = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
    if dx * dx + dy * dy < MIN_SEGMENT_LENGTH * MIN_SEGMENT_LENGTH {
        return (0.0, (mid.0, mid.1 - EDGE_LABEL_OFFSET));
    }
    let mut angle = dy.atan2(dx);
    if angle > FRAC_PI_2 {
        angle -= PI;
    } else if angle <= -FRAC_PI_2 {
        angle += PI;
    }
    let anchor = (
        mid.0 + angle.sin() * EDGE_LABEL_OFFSET,
        mid.1 - angle.cos() * EDGE_LABEL_OFFSET,
    );
    (angle, anchor)
}

fn on_screen(p: Point<Pixels>, container: gpui::Size<Pixels>, margin: f32) -> bool {
    let x = f32::from(p.x);
    let y = f32::from(p.y);
    x >= -margin
        && y >= -margin
        && x <= f32::from(container.width) + margin
        && y <= f32::from(container.height) + margin
}

fn segment_on_screen(
    from: Point<Pixels>,
    to: Point<Pixels>,
    container: gpui::Size<Pixels>,
    margin: f32,
) -> bool {
    let min_x = f32::from(from.x).min(f32::from(to.x));
    let max_x = f32::from(from.x).max(f32::from(to.x));
    let min_y = f32::from(from.y).min(f32::from(to.y));
    let max_y = f32::from(from.y).max(f32::from(to.y));
    max_x >= -margin
        && max_y >= -margin
        && min_x <= f32::from(container.width) + margin
        && min_y <= f32::from(container.height) + margin
}

impl FramePlan {
    /// Total shape count across all layers, for paint diagnostics.
    pub fn shape_count(&self) -> usize {
        self.dimmed_edges.len()
            + self.dimmed_nodes.len()
            + self.dimmed_edge_labels.len()
            + self.normal_edges.len()
            + self.focus_edges.len()
            + self.active_edges.len()
            + self.nodes.len()
            + self.normal_edge_labels.len()
            + self.focus_edge_labels.len()
            + self.active_edge_labels.len()
    }

    /// Labels of the dimmed node layer, drawn below the lit edge layers.
    pub fn dimmed_node_labels(&self) -> impl Iterator<Item = &LabelShape> {
        self.dimmed_nodes.iter().filter_map(|n| n.label.as_ref())
    }

    /// Labels of the non-dimmed node layer, drawn below the lit edge labels.
    pub fn lit_node_labels(&self) -> impl Iterator<Item = &LabelShape> {
        self.nodes.iter().filter_map(|n| n.label.as_ref())
    }

    pub fn edge_labels(&self) -> impl Iterator<Item = &EdgeLabel> {
        self.dimmed_edge_labels
            .iter()
            .chain(self.normal_edge_labels.iter())
            .chain(self.focus_edge_labels.iter())
            .chain(self.active_edge_labels.iter())
    }
}

pub fn build_frame_plan(canvas: &GraphCanvas) -> FramePlan {
    crate::profile_scope!("build_frame_plan");
    let mut plan = FramePlan::default();
    let model = &canvas.model;
    let viewport = &canvas.viewport;
    let container = canvas.container_size();
    let zoom = viewport.zoom;

    let focus = resolve_focus(canvas);
    let focus_exists = focus != Focus::None;
    let focus_nodes = focus_node_set(canvas, &focus);
    let focused_node = match focus {
        Focus::Node(i) => Some(i),
        _ => None,
    };
    let focused_node_id = focused_node.map(|i| model.nodes[i].id.as_str());

    let edge_active = |i: usize, link: &ViewLink| {
        canvas.hovered_edge == Some(i) || canvas.selected_edge_id.as_deref() == Some(link.id.as_str())
    };
    let edge_incident_to_focus = |link: &ViewLink| {
        focused_node_id.is_some_and(|id| link.source == id || link.target == id)
    };

    for (i, link) in model.links.iter().enumerate() {
        let (Some(a), Some(b)) = (model.node(&link.source), model.node(&link.target)) else {
            continue;
        };
        let a_pos = a.effective_position();
        let b_pos = b.effective_position();
        let from = CoordinateConverter::sim_to_screen(a_pos, viewport);
        let to = CoordinateConverter::sim_to_screen(b_pos, viewport);
        if !segment_on_screen(from, to, container, CULLING_MARGIN) {
            continue;
        }

        let active = edge_active(i, link);
        let incident = edge_incident_to_focus(link);
        let in_focus_set = incident || matches!(focus, Focus::Edge(e) if e == i);
        // A selected edge outside a node focus dims with everything else
        // (hover beats selection) but keeps its label, dimmed
        let dimmed = focus_exists && !in_focus_set && canvas.hovered_edge != Some(i);

        let base = color(EDGE_COLOR);
        let (shape_color, stroke, bucket) = if dimmed {
            (dim(base), EDGE_STROKE_WIDTH, &mut plan.dimmed_edges)
        } else if active {
            (base, ACTIVE_EDGE_STROKE_WIDTH, &mut plan.active_edges)
        } else if in_focus_set {
            (base, ACTIVE_EDGE_STROKE_WIDTH, &mut plan.focus_edges)
        } else {
            (base, EDGE_STROKE_WIDTH, &mut plan.normal_edges)
        };
        bucket.push(EdgeShape {
            link: i,
            from,
            to,
            color: shape_color,
            stroke_width: px(stroke * zoom),
        });

        // Labels only for active edges or edges incident to the focused node
        if !link.label.is_empty() && (active || incident) {
            let (angle, anchor) = edge_label_geometry(a_pos, b_pos);
            let label_color = if dimmed {
                dim(color(EDGE_LABEL_COLOR))
            } else {
                color(EDGE_LABEL_COLOR)
            };
            let label = EdgeLabel {
                link: i,
                text: link.label.clone(),
                anchor: CoordinateConverter::sim_to_screen(anchor, viewport),
                angle,
                font_size: px(EDGE_LABEL_FONT_SIZE * zoom),
                color: label_color,
            };
            if dimmed {
                plan.dimmed_edge_labels.push(label);
            } else if active {
                plan.active_edge_labels.push(label);
            } else {
                plan.focus_edge_labels.push(label);
            }
        }
    }

    // A focused node with many neighbors would bury itself in labels
    if plan.focus_edge_labels.len() > MAX_FOCUS_EDGE_LABELS {
        plan.focus_edge_labels.clear();
    }

    for (i, node) in model.nodes.iter().enumerate() {
        let center = CoordinateConverter::sim_to_screen(node.effective_position(), viewport);
        let radius = node.radius() * zoom;
        if !on_screen(center, container, CULLING_MARGIN + radius) {
            continue;
        }

        let dimmed = focus_exists && !focus_nodes.contains(&i);
        let is_focused = focused_node == Some(i);
        let emphasized = canvas.hovered_node == Some(i)
            || canvas.selected_node_id.as_deref() == Some(node.id.as_str());

        let font_size = if emphasized {
            NODE_LABEL_FONT_SIZE + FOCUS_LABEL_FONT_BUMP
        } else {
            NODE_LABEL_FONT_SIZE
        };
        let text = if is_focused {
            node.label.clone()
        } else {
            truncate_label(&node.label, font_size)
        };
        let label = (!text.is_empty()).then(|| {
            let est_width = text.chars().count() as f32 * font_size * GLYPH_WIDTH_RATIO * zoom;
            let label_color = if dimmed {
                dim(color(NODE_LABEL_COLOR))
            } else {
                color(NODE_LABEL_COLOR)
            };
            LabelShape {
                text,
                origin: Point {
                    x: center.x - px(est_width / 2.0),
                    y: center.y + px(radius + 3.0 * zoom),
                },
                font_size: px(font_size * zoom),
                color: label_color,
            }
        });

        let highlight_ring = canvas
            .highlighted_node_ids
            .contains(&node.id)
            .then(|| color(HIGHLIGHT_RING_COLOR));

        let shape = NodeShape {
            node: i,
            center,
            radius: px(radius),
            color: if dimmed { dim(node.color) } else { node.color },
            highlight_ring,
            label,
        };
        if dimmed {
            plan.dimmed_nodes.push(shape);
        } else {
            plan.nodes.push(shape);
        }
    }

    plan
}
