//! Snapshot tests using the insta crate.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use graphboard::{GraphElement, elements_from_json};

#[test]
fn snapshot_node_element() {
    let element = GraphElement {
        id: Some("mission".into()),
        source: None,
        target: None,
        label: Some("Mission Control".into()),
        short_label: Some("MC".into()),
        display_name: Some("mission-control".into()),
        kind: Some("entity".into()),
        tags: vec!["user".into()],
    };
    insta::assert_json_snapshot!("node_element", element);
}

#[test]
fn snapshot_edge_element() {
    let elements = elements_from_json(
        r#"[{"id": "link-1", "source": "a", "target": "b", "label": "mentions"}]"#,
    )
    .unwrap();
    insta::assert_json_snapshot!("edge_element", elements[0]);
}
