//! Focus, dimming and layering through the frame plan.

use crate::helpers::{TestGraphBuilder, edge, labeled_node};
use graphboard::GraphCanvas;
use graphboard::render::build_frame_plan;
use gpui::{point, px};

/// a - b - c chain with an unrelated d
fn chain() -> GraphCanvas {
    TestGraphBuilder::new()
        .with_node_at("a", (100.0, 100.0))
        .with_node_at("b", (250.0, 100.0))
        .with_node_at("c", (400.0, 100.0))
        .with_node_at("d", (100.0, 400.0))
        .with_edge("ab", "a", "b")
        .with_edge("bc", "b", "c")
        .build()
}

#[test]
fn selecting_a_node_lights_its_neighborhood_and_dims_the_rest() {
    let mut canvas = chain();
    canvas.selected_node_id = Some("a".into());
    let plan = build_frame_plan(&canvas);

    let lit: Vec<&str> = plan
        .nodes
        .iter()
        .map(|n| canvas.model.nodes[n.node].id.as_str())
        .collect();
    assert_eq!(lit, vec!["a", "b"]);

    let dimmed: Vec<&str> = plan
        .dimmed_nodes
        .iter()
        .map(|n| canvas.model.nodes[n.node].id.as_str())
        .collect();
    assert_eq!(dimmed, vec!["c", "d"]);
}

#[test]
fn hovering_moves_focus_away_from_the_selection() {
    let mut canvas = chain();
    canvas.selected_node_id = Some("a".into());
    // Hover c through the real hit path
    canvas.handle_pointer_move(point(px(400.0), px(100.0)));
    assert_eq!(canvas.hovered_node, canvas.model.node_index("c"));

    let plan = build_frame_plan(&canvas);
    let lit: Vec<&str> = plan
        .nodes
        .iter()
        .map(|n| canvas.model.nodes[n.node].id.as_str())
        .collect();
    // c and its neighbor b are lit; the selected a is now dimmed
    assert_eq!(lit, vec!["b", "c"]);
}

#[test]
fn no_focus_draws_everything_undimmed_in_the_normal_layers() {
    let canvas = chain();
    let plan = build_frame_plan(&canvas);
    assert!(plan.dimmed_nodes.is_empty());
    assert!(plan.dimmed_edges.is_empty());
    assert!(plan.focus_edges.is_empty());
    assert!(plan.active_edges.is_empty());
    assert_eq!(plan.nodes.len(), 4);
    assert_eq!(plan.normal_edges.len(), 2);
    assert_eq!(plan.edge_labels().count(), 0);
}

#[test]
fn hovered_edge_is_active_and_labeled() {
    let mut canvas = chain();
    canvas.handle_pointer_move(point(px(175.0), px(101.0)));
    assert_eq!(canvas.hovered_edge, Some(0));

    let plan = build_frame_plan(&canvas);
    assert_eq!(plan.active_edges.len(), 1);
    assert_eq!(plan.active_edge_labels.len(), 1);
    assert_eq!(plan.active_edge_labels[0].text, "ab");
    // The edge's stroke is heavier than a normal edge's
    assert!(plan.active_edges[0].stroke_width > plan.dimmed_edges[0].stroke_width);
}

#[test]
fn edge_labels_appear_for_edges_incident_to_the_focused_node() {
    let mut canvas = chain();
    canvas.handle_pointer_move(point(px(250.0), px(100.0))); // hover b
    let plan = build_frame_plan(&canvas);
    let mut labels: Vec<&str> = plan
        .focus_edge_labels
        .iter()
        .map(|l| l.text.as_str())
        .collect();
    labels.sort();
    assert_eq!(labels, vec!["ab", "bc"]);
}

#[test]
fn dimmed_node_labels_stay_in_the_dimmed_group() {
    let mut canvas = chain();
    canvas.handle_pointer_move(point(px(100.0), px(100.0))); // hover a
    let plan = build_frame_plan(&canvas);

    // d is outside a's neighborhood; its label belongs to the dimmed
    // group the view stacks below the lit canvas pass
    let dimmed: Vec<&str> = plan.dimmed_node_labels().map(|l| l.text.as_str()).collect();
    assert!(dimmed.contains(&"d"));
    let lit: Vec<&str> = plan.lit_node_labels().map(|l| l.text.as_str()).collect();
    assert!(!lit.contains(&"d"));
    assert!(lit.contains(&"a"));
}

#[test]
fn selected_edge_under_node_hover_dims_but_keeps_its_label() {
    let mut canvas = chain();
    canvas.selected_edge_id = Some("bc".into());
    canvas.handle_pointer_move(point(px(100.0), px(100.0))); // hover a
    let plan = build_frame_plan(&canvas);

    assert!(plan.active_edges.is_empty());
    assert_eq!(plan.dimmed_edges.len(), 1);
    assert_eq!(plan.dimmed_edge_labels.len(), 1);
    assert_eq!(plan.dimmed_edge_labels[0].text, "bc");
}

#[test]
fn highlighted_nodes_get_rings_without_affecting_dimming() {
    let mut canvas = chain();
    canvas.highlighted_node_ids = ["c".to_string()].into_iter().collect();
    let plan = build_frame_plan(&canvas);
    let ringed: Vec<&str> = plan
        .nodes
        .iter()
        .filter(|n| n.highlight_ring.is_some())
        .map(|n| canvas.model.nodes[n.node].id.as_str())
        .collect();
    assert_eq!(ringed, vec!["c"]);
    assert!(plan.dimmed_nodes.is_empty());
}

#[test]
fn episode_nodes_render_larger_than_entities() {
    let mut builder = TestGraphBuilder::new().with_node_at("plain", (100.0, 100.0));
    let mut episode = labeled_node("ep", "Episode");
    episode.kind = Some("episode".into());
    builder = builder.with_element(episode).with_element(edge("x", "plain", "ep", "rel"));
    let mut canvas = builder.build();
    canvas.model.node_mut("ep").unwrap().position = (300.0, 100.0);

    let plan = build_frame_plan(&canvas);
    let radius_of = |id: &str| {
        plan.nodes
            .iter()
            .find(|n| canvas.model.nodes[n.node].id == id)
            .map(|n| n.radius)
            .unwrap()
    };
    assert!(radius_of("ep") > radius_of("plain"));
}
