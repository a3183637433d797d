//! gpui shell around the canvas engine.
//!
//! [`GraphView`] is a thin reactive wrapper: it forwards pointer and wheel
//! events into [`GraphCanvas`], re-emits click outcomes as entity events,
//! and drives the simulation with a per-frame canvas element that re-arms
//! `request_animation_frame` only while the layout is still cooling. One
//! `cx.notify` per tick keeps redraws at one per animation frame. Dropping
//! the entity drops the tick closure with it, so teardown detaches the
//! loop without explicit cancellation.

use crate::canvas::{CanvasEvent, GraphCanvas};
use crate::render::canvas::{paint_dimmed_frame, paint_lit_frame};
use crate::render::plan::{EdgeLabel, build_frame_plan};
use crate::types::GraphElement;
use gpui::{
    AppContext, Context, Div, EventEmitter, InteractiveElement, IntoElement, MouseButton, MouseDownEvent,
    MouseMoveEvent, MouseUpEvent, ParentElement, Pixels, Point, Render, Rgba, ScrollDelta,
    ScrollWheelEvent, Styled, Window, canvas, div, point, px,
};
use gpui_component::ActiveTheme;
use std::rc::Rc;

/// Scroll wheels report pixel deltas on some devices; this many pixels
/// count as one notch.
const SCROLL_PIXELS_PER_NOTCH: f32 = 60.0;

fn label_div(text: String, origin: Point<Pixels>, font_size: Pixels, color: Rgba) -> Div {
    div()
        .absolute()
        .left(origin.x)
        .top(origin.y)
        .text_size(font_size)
        .text_color(color)
        .child(text)
}

fn edge_label_divs(labels: &[EdgeLabel]) -> Vec<Div> {
    labels
        .iter()
        .map(|label| label_div(label.text.clone(), label.origin(), label.font_size, label.color))
        .collect()
}

pub struct GraphView {
    pub canvas: GraphCanvas,
    /// Screen origin of the canvas element, captured by the bounds tracker
    origin: Point<Pixels>,
}

impl EventEmitter<CanvasEvent> for GraphView {}

impl Default for GraphView {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphView {
    pub fn new() -> Self {
        Self {
            canvas: GraphCanvas::new(),
            origin: point(px(0.0), px(0.0)),
        }
    }

    // ========================================================================
    // Embedding surface
    // ========================================================================

    pub fn set_elements(
        &mut self,
        elements: &[GraphElement],
        center_node_id: Option<&str>,
        cx: &mut Context<Self>,
    ) {
        self.canvas.set_elements(elements, center_node_id);
        cx.notify();
    }

    /// Remove all content and stop the simulation.
    pub fn clear(&mut self, cx: &mut Context<Self>) {
        self.canvas.clear();
        cx.notify();
    }

    pub fn set_selected_node(&mut self, id: Option<String>, cx: &mut Context<Self>) {
        if self.canvas.selected_node_id != id {
            self.canvas.selected_node_id = id;
            cx.notify();
        }
    }

    pub fn set_selected_edge(&mut self, id: Option<String>, cx: &mut Context<Self>) {
        if self.canvas.selected_edge_id != id {
            self.canvas.selected_edge_id = id;
            cx.notify();
        }
    }

    pub fn set_highlighted_nodes(
        &mut self,
        ids: impl IntoIterator<Item = String>,
        cx: &mut Context<Self>,
    ) {
        self.canvas.highlighted_node_ids = ids.into_iter().collect();
        cx.notify();
    }

    /// One-shot pan request. The completion runs exactly once, whether or
    /// not the node exists; callers use it to clear their request state.
    pub fn pan_to_node(
        &mut self,
        id: &str,
        on_complete: impl FnOnce(bool) + 'static,
        cx: &mut Context<Self>,
    ) {
        let found = self.canvas.center_on_node(id);
        on_complete(found);
        cx.notify();
    }

    // ========================================================================
    // Event handlers
    // ========================================================================

    fn local(&self, window_pos: Point<Pixels>) -> Point<Pixels> {
        point(window_pos.x - self.origin.x, window_pos.y - self.origin.y)
    }

    fn within_bounds(&self, local: Point<Pixels>) -> bool {
        let container = self.canvas.container_size();
        local.x >= px(0.0)
            && local.y >= px(0.0)
            && local.x <= container.width
            && local.y <= container.height
    }

    fn on_mouse_down(&mut self, event: &MouseDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let pos = self.local(event.position);
        if !self.within_bounds(pos) {
            return;
        }
        self.canvas.handle_pointer_down(pos);
        cx.notify();
    }

    fn on_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let pos = self.local(event.position);
        let redraw = if self.within_bounds(pos) {
            self.canvas.handle_pointer_move(pos)
        } else {
            self.canvas.handle_pointer_leave()
        };
        if redraw {
            cx.notify();
        }
    }

    fn on_mouse_up(&mut self, event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let pos = self.local(event.position);
        if let Some(outcome) = self.canvas.handle_pointer_up(pos) {
            cx.emit(outcome);
        }
        cx.notify();
    }

    fn on_scroll(&mut self, event: &ScrollWheelEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let pos = self.local(event.position);
        let notches = match event.delta {
            ScrollDelta::Lines(lines) => lines.y,
            ScrollDelta::Pixels(pixels) => f32::from(pixels.y) / SCROLL_PIXELS_PER_NOTCH,
        };
        if self.canvas.handle_wheel(notches, pos) {
            cx.notify();
        }
    }
}

impl Render for GraphView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Capture the element's screen bounds so window-space pointer
        // positions can be made element-local, and feed the container
        // size into the engine (which runs any deferred initial layout).
        let entity = cx.entity();
        let bounds_tracker = canvas(
            |_bounds, _window, _cx| (),
            move |bounds, _state, _window, cx| {
                cx.update_entity(&entity, |view, _| {
                    view.origin = bounds.origin;
                    view.canvas.set_container_size(bounds.size);
                });
            },
        )
        .absolute()
        .size_full();

        // Two canvas passes with the label elements interleaved between
        // them keep the back-to-front order: dimmed shapes and their
        // labels sit under everything lit, and lit node labels sit under
        // the normal/focus/active edge labels.
        let plan = Rc::new(build_frame_plan(&self.canvas));

        let dimmed_node_labels: Vec<_> = plan
            .dimmed_node_labels()
            .map(|l| label_div(l.text.clone(), l.origin, l.font_size, l.color))
            .collect();
        let lit_node_labels: Vec<_> = plan
            .lit_node_labels()
            .map(|l| label_div(l.text.clone(), l.origin, l.font_size, l.color))
            .collect();
        let dimmed_edge_labels = edge_label_divs(&plan.dimmed_edge_labels);
        let normal_edge_labels = edge_label_divs(&plan.normal_edge_labels);
        let focus_edge_labels = edge_label_divs(&plan.focus_edge_labels);
        let active_edge_labels = edge_label_divs(&plan.active_edge_labels);

        let dimmed_plan = Rc::clone(&plan);
        let dimmed_canvas = canvas(
            |_bounds, _window, _cx| (),
            move |bounds, _state, window, _cx| {
                paint_dimmed_frame(&dimmed_plan, bounds.origin, window);
            },
        )
        .absolute()
        .size_full();
        let lit_plan = Rc::clone(&plan);
        let lit_canvas = canvas(
            |_bounds, _window, _cx| (),
            move |bounds, _state, window, _cx| {
                paint_lit_frame(&lit_plan, bounds.origin, window);
            },
        )
        .absolute()
        .size_full();

        // Per-frame simulation driver; re-arms itself only while cooling
        let entity = cx.entity();
        let sim_canvas = canvas(
            |_bounds, _window, _cx| (),
            move |_bounds, _state, window, cx| {
                let active = cx.read_entity(&entity, |view: &GraphView, _| {
                    view.canvas.simulation_active()
                });
                if !active {
                    return;
                }
                window.request_animation_frame();
                cx.update_entity(&entity, |view, cx| {
                    if view.canvas.tick() {
                        cx.notify();
                    }
                });
            },
        )
        .absolute()
        .size_full();

        div()
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(cx.theme().background)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_mouse_down))
            .on_mouse_move(cx.listener(Self::on_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .on_scroll_wheel(cx.listener(Self::on_scroll))
            .child(bounds_tracker)
            .child(dimmed_canvas)
            .children(dimmed_node_labels)
            .children(dimmed_edge_labels)
            .child(lit_canvas)
            .children(lit_node_labels)
            .children(normal_edge_labels)
            .children(focus_edge_labels)
            .children(active_edge_labels)
            .child(sim_canvas)
    }
}
