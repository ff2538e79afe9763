use super::InputWiring;
use crate::gesture::TouchPoint;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(w: &InputWiring) {
    wire_touchstart(w);
    wire_touchmove(w);
    wire_touchend(w);
}

// Event timestamps are forwarded to the tracker so its double-tap timing
// never reads a clock of its own.
fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        let touches = touch_points(&ev.touches());
        let events = w
            .tracker
            .borrow_mut()
            .on_touch_start(&touches, ev.time_stamp());
        super::dispatch(&w, events);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        let touches = touch_points(&ev.touches());
        let events = w.tracker.borrow_mut().on_touch_move(&touches);
        super::dispatch(&w, events);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchend(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        let remaining = touch_points(&ev.touches());
        let changed = ev.changed_touches().length() as usize;
        let events = w
            .tracker
            .borrow_mut()
            .on_touch_end(&remaining, changed, ev.time_stamp());
        super::dispatch(&w, events);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn touch_points(list: &web::TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint {
            x: t.client_x() as f32,
            y: t.client_y() as f32,
        })
        .collect()
}
