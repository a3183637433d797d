//! Adapter tests: JSON ingestion and table building.

use crate::helpers::{edge, episode_node, init_tracing, labeled_node, node};
use graphboard::types::SizeTier;
use graphboard::{GraphElement, build_model, elements_from_json};

#[test]
fn parses_elements_from_json() {
    init_tracing();
    let json = r#"[
        {"id": "a", "label": "Alpha", "kind": "entity"},
        {"id": "b", "display_name": "Beta"},
        {"id": "ab", "source": "a", "target": "b", "label": "knows"}
    ]"#;
    let elements = elements_from_json(json).unwrap();
    assert_eq!(elements.len(), 3);
    assert!(elements[2].is_edge_like());

    let model = build_model(&elements);
    assert_eq!(model.nodes.len(), 2);
    assert_eq!(model.links.len(), 1);
    assert_eq!(model.node("a").unwrap().label, "Alpha");
    assert_eq!(model.node("b").unwrap().label, "Beta");
}

#[test]
fn rejects_malformed_json() {
    assert!(elements_from_json("not json").is_err());
    assert!(elements_from_json(r#"{"id": "a"}"#).is_err()); // not an array
}

#[test]
fn unknown_fields_are_ignored() {
    let json = r#"[{"id": "a", "weight": 3, "metadata": {"x": 1}}]"#;
    let elements = elements_from_json(json).unwrap();
    assert_eq!(elements[0].id.as_deref(), Some("a"));
}

#[test]
fn every_link_endpoint_exists_in_the_node_table() {
    let model = build_model(&[
        node("a"),
        node("b"),
        edge("ok", "a", "b", "fine"),
        edge("dangling", "a", "ghost", "dropped"),
        edge("orphan", "x", "y", "dropped"),
    ]);
    assert_eq!(model.links.len(), 1);
    for link in &model.links {
        assert!(model.node(&link.source).is_some());
        assert!(model.node(&link.target).is_some());
    }
}

#[test]
fn duplicate_edge_triples_get_suffixed_ids() {
    let model = build_model(&[
        node("a"),
        node("b"),
        edge("e1", "a", "b", "knows"),
        edge("e2", "a", "b", "knows"),
        edge("e3", "a", "b", "knows"),
        edge("e4", "a", "b", "likes"),
    ]);
    let ids: Vec<&str> = model.links.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["e1", "e2#2", "e3#3", "e4"]);
}

#[test]
fn label_priority_full_short_display_id() {
    let mut with_all = labeled_node("n", "Full");
    with_all.short_label = Some("Short".into());
    with_all.display_name = Some("Display".into());

    let mut no_full = node("n2");
    no_full.label = None;
    no_full.short_label = Some("Short".into());
    no_full.display_name = Some("Display".into());

    let mut only_display = node("n3");
    only_display.label = None;
    only_display.display_name = Some("Display".into());

    let mut bare = node("n4");
    bare.label = None;

    let model = build_model(&[with_all, no_full, only_display, bare]);
    assert_eq!(model.node("n").unwrap().label, "Full");
    assert_eq!(model.node("n2").unwrap().label, "Short");
    assert_eq!(model.node("n3").unwrap().label, "Display");
    assert_eq!(model.node("n4").unwrap().label, "n4");
}

#[test]
fn episode_kind_and_tag_raise_the_size_tier() {
    let mut tagged = node("t");
    tagged.tags = vec!["Episodic".into()];
    let model = build_model(&[node("plain"), episode_node("e"), tagged]);
    assert_eq!(model.node("plain").unwrap().size_tier, SizeTier::Entity);
    assert_eq!(model.node("e").unwrap().size_tier, SizeTier::Episode);
    assert_eq!(model.node("t").unwrap().size_tier, SizeTier::Episode);
}

#[test]
fn colors_are_deterministic_across_builds() {
    let elements = [
        node("a"),
        episode_node("e"),
        GraphElement {
            id: Some("u".into()),
            kind: Some("entity".into()),
            tags: vec!["user".into()],
            ..Default::default()
        },
    ];
    let first = build_model(&elements);
    let second = build_model(&elements);
    for (a, b) in first.nodes.iter().zip(&second.nodes) {
        assert_eq!(a.color, b.color);
    }
    // The user tag overrides the entity kind color
    assert_ne!(
        first.node("u").unwrap().color,
        first.node("a").unwrap().color
    );
}
