//! Pointer, touch and wheel workflows through the engine entry points.

use crate::helpers::TestGraphBuilder;
use graphboard::input::CoordinateConverter;
use graphboard::{CanvasEvent, GraphCanvas};
use gpui::{point, px};

fn triangle() -> GraphCanvas {
    TestGraphBuilder::new()
        .with_node_at("a", (100.0, 100.0))
        .with_node_at("b", (300.0, 100.0))
        .with_node_at("c", (200.0, 300.0))
        .with_edge("ab", "a", "b")
        .with_edge("bc", "b", "c")
        .build()
}

#[test]
fn click_fires_iff_displacement_stays_under_threshold() {
    // Stay under: click fires
    let mut canvas = triangle();
    canvas.handle_pointer_down(point(px(100.0), px(100.0)));
    canvas.handle_pointer_move(point(px(102.0), px(101.0)));
    assert_eq!(
        canvas.handle_pointer_up(point(px(102.0), px(101.0))),
        Some(CanvasEvent::NodeClicked("a".into()))
    );

    // Cross it: click suppressed, position mutated instead
    let mut canvas = triangle();
    canvas.handle_pointer_down(point(px(100.0), px(100.0)));
    canvas.handle_pointer_move(point(px(130.0), px(100.0)));
    assert_eq!(canvas.handle_pointer_up(point(px(130.0), px(100.0))), None);
    assert!((canvas.model.node("a").unwrap().position.0 - 130.0).abs() < 1e-3);
}

#[test]
fn drag_pins_only_the_grabbed_node() {
    let mut canvas = triangle();
    canvas.handle_pointer_down(point(px(100.0), px(100.0)));
    canvas.handle_pointer_move(point(px(150.0), px(150.0)));
    assert!(canvas.model.node("a").unwrap().pinned_position.is_some());
    assert!(canvas.model.node("b").unwrap().pinned_position.is_none());
    assert!(canvas.model.node("c").unwrap().pinned_position.is_none());

    // While dragged, ticks may move the others but never the pinned node
    let pinned = canvas.model.node("a").unwrap().effective_position();
    for _ in 0..10 {
        canvas.tick();
    }
    let after = canvas.model.node("a").unwrap().effective_position();
    assert!((pinned.0 - after.0).abs() < 1e-3);
    assert!((pinned.1 - after.1).abs() < 1e-3);
}

#[test]
fn drag_reheats_a_settled_simulation() {
    let mut canvas = triangle();
    assert!(!canvas.simulation_active());
    canvas.handle_pointer_down(point(px(300.0), px(100.0)));
    canvas.handle_pointer_move(point(px(340.0), px(120.0)));
    assert!(canvas.simulation_active());
    assert!(canvas.tick());
}

#[test]
fn pan_then_release_is_not_a_background_click() {
    let mut canvas = triangle();
    canvas.handle_pointer_down(point(px(600.0), px(500.0)));
    canvas.handle_pointer_move(point(px(700.0), px(520.0)));
    assert_eq!(canvas.handle_pointer_up(point(px(700.0), px(520.0))), None);
    assert_eq!(f32::from(canvas.viewport.offset.x), 100.0);
    assert_eq!(f32::from(canvas.viewport.offset.y), 20.0);
}

#[test]
fn wheel_zoom_keeps_the_point_under_the_cursor() {
    let mut canvas = triangle();
    let cursor = point(px(250.0), px(180.0));
    let before = CoordinateConverter::screen_to_sim(cursor, &canvas.viewport);
    canvas.handle_wheel(2.0, cursor);
    canvas.handle_wheel(1.0, cursor);
    let after = CoordinateConverter::screen_to_sim(cursor, &canvas.viewport);
    assert!((before.0 - after.0).abs() < 1e-2);
    assert!((before.1 - after.1).abs() < 1e-2);

    // Hit testing agrees with the transform after zooming
    let node_screen =
        CoordinateConverter::sim_to_screen((100.0, 100.0), &canvas.viewport);
    canvas.handle_pointer_down(node_screen);
    assert_eq!(
        canvas.handle_pointer_up(node_screen),
        Some(CanvasEvent::NodeClicked("a".into()))
    );
}

#[test]
fn zoom_in_then_out_restores_the_original_scale() {
    let mut canvas = triangle();
    let cursor = point(px(400.0), px(300.0));
    for _ in 0..4 {
        canvas.handle_wheel(1.0, cursor);
    }
    for _ in 0..4 {
        canvas.handle_wheel(-1.0, cursor);
    }
    assert!((canvas.viewport.zoom - 1.0).abs() < 1e-4);
}

#[test]
fn pinch_scales_by_finger_distance_ratio_about_the_start_midpoint() {
    let mut canvas = triangle();
    let mid = point(px(300.0), px(200.0));
    let before = CoordinateConverter::screen_to_sim(mid, &canvas.viewport);

    canvas.handle_touch_start(&[point(px(250.0), px(200.0)), point(px(350.0), px(200.0))]);
    canvas.handle_touch_move(&[point(px(200.0), px(200.0)), point(px(400.0), px(200.0))]);
    assert!((canvas.viewport.zoom - 2.0).abs() < 1e-4);
    let after = CoordinateConverter::screen_to_sim(mid, &canvas.viewport);
    assert!((before.0 - after.0).abs() < 1e-3);
    assert!((before.1 - after.1).abs() < 1e-3);

    assert_eq!(canvas.handle_touch_end(&[]), None);
    assert!(canvas.input_state.is_idle());
}

#[test]
fn tap_dispatches_the_target_captured_at_touch_start() {
    let mut canvas = triangle();
    canvas.handle_touch_start(&[point(px(200.0), px(102.0))]); // on edge ab
    assert_eq!(
        canvas.handle_touch_end(&[]),
        Some(CanvasEvent::EdgeClicked("ab".into()))
    );

    canvas.handle_touch_start(&[point(px(300.0), px(100.0))]);
    assert_eq!(
        canvas.handle_touch_end(&[]),
        Some(CanvasEvent::NodeClicked("b".into()))
    );
}
