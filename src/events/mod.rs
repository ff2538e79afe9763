pub mod pointer;
pub mod touch;
pub mod ui;

pub use ui::DomUiSink;

use crate::gesture::{GestureEvent, GestureEvents, GestureInputTracker};
use crate::orientation::OrientationController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles threaded through the event closures.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub tracker: Rc<RefCell<GestureInputTracker>>,
    pub controller: Rc<RefCell<OrientationController<DomUiSink>>>,
}

pub fn wire_input_handlers(w: &InputWiring) {
    pointer::wire(w);
    touch::wire(w);
}

/// Applies one callback's worth of classified gestures to the controller,
/// synchronously, so they land before the next `advance()` tick. Cosmetic
/// side effects the host owns (cursor, reset toast) ride along here.
pub(crate) fn dispatch(w: &InputWiring, events: GestureEvents) {
    for ev in events {
        match ev {
            GestureEvent::DragStart => set_cursor(&w.canvas, "grabbing"),
            GestureEvent::DragEnd => set_cursor(&w.canvas, "grab"),
            GestureEvent::DoubleTap => {
                if let Some(doc) = crate::dom::window_document() {
                    crate::overlay::show_toast(&doc, "Rotation Reset");
                }
            }
            _ => {}
        }
        w.controller.borrow_mut().apply(ev);
    }
}

fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    _ = canvas.style().set_property("cursor", cursor);
}
