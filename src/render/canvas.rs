//! GPU paint pass for the frame plan.
//!
//! Edges are stroked paths, nodes are fully-rounded quads (a quad with
//! corner radius equal to half its size renders as a disc). Labels are
//! laid out as positioned text elements by the view shell, not painted
//! here, since text shaping belongs to the element tree.

use crate::render::plan::{EdgeShape, FramePlan, NodeShape};
use gpui::{Bounds, PathBuilder, Pixels, Point, Window, point, px, quad, size};

/// Paint the dimmed edge and node layers, offset by the canvas element's
/// on-screen origin. The view stacks the dimmed label elements directly
/// above this pass, underneath [`paint_lit_frame`].
pub fn paint_dimmed_frame(plan: &FramePlan, origin: Point<Pixels>, window: &mut Window) {
    crate::profile_scope!("paint_dimmed_frame");
    paint_edge_layer(&plan.dimmed_edges, origin, window);
    paint_node_layer(&plan.dimmed_nodes, origin, window);
}

/// Paint the normal, focus and active edge layers followed by the
/// non-dimmed nodes. Lit labels stack above this pass in the view.
pub fn paint_lit_frame(plan: &FramePlan, origin: Point<Pixels>, window: &mut Window) {
    crate::profile_scope!("paint_lit_frame");
    paint_edge_layer(&plan.normal_edges, origin, window);
    paint_edge_layer(&plan.focus_edges, origin, window);
    paint_edge_layer(&plan.active_edges, origin, window);
    paint_node_layer(&plan.nodes, origin, window);

    #[cfg(feature = "profiling")]
    tracing::trace!(shapes = plan.shape_count(), "painted frame");
}

fn paint_edge_layer(edges: &[EdgeShape], origin: Point<Pixels>, window: &mut Window) {
    for edge in edges {
        let mut path = PathBuilder::stroke(edge.stroke_width);
        path.move_to(point(origin.x + edge.from.x, origin.y + edge.from.y));
        path.line_to(point(origin.x + edge.to.x, origin.y + edge.to.y));
        if let Ok(built) = path.build() {
            window.paint_path(built, edge.color);
        }
    }
}

fn paint_node_layer(nodes: &[NodeShape], origin: Point<Pixels>, window: &mut Window) {
    for node in nodes {
        let r = node.radius;
        let bounds = Bounds {
            origin: point(origin.x + node.center.x - r, origin.y + node.center.y - r),
            size: size(r * 2.0, r * 2.0),
        };

        if let Some(ring) = node.highlight_ring {
            let ring_width = px(crate::constants::HIGHLIGHT_RING_WIDTH);
            let ring_bounds = Bounds {
                origin: point(
                    bounds.origin.x - ring_width,
                    bounds.origin.y - ring_width,
                ),
                size: size(
                    bounds.size.width + ring_width * 2.0,
                    bounds.size.height + ring_width * 2.0,
                ),
            };
            window.paint_quad(quad(
                ring_bounds,
                r + ring_width,
                gpui::transparent_black(),
                ring_width,
                ring,
                Default::default(),
            ));
        }

        window.paint_quad(quad(
            bounds,
            r,
            node.color,
            px(0.0),
            node.color,
            Default::default(),
        ));
    }
}
