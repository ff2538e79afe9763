use crate::constants::FACE_COUNT;
use crate::dom;
use crate::orientation::{OrientationController, UiSink};
use crate::overlay;
use crate::textures;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keeps the auto-rotate checkbox honest when the controller switches the
/// autopilot off as a side effect of a manual drag.
pub struct DomUiSink {
    document: web::Document,
}

impl DomUiSink {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl UiSink for DomUiSink {
    fn notify_auto_rotate_disabled(&mut self) {
        if let Some(el) = self.document.get_element_by_id("autoRotate") {
            if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                input.set_checked(false);
            }
        }
    }
}

/// Wires the control panel: auto-rotate toggle, speed slider, reset and
/// clear buttons, the six face buttons and their file inputs, and the
/// touch help button. Each control forwards verbatim to the controller or
/// the texture queue.
pub fn wire_ui_controls(
    document: &web::Document,
    controller: Rc<RefCell<OrientationController<DomUiSink>>>,
    pending: textures::PendingUploads,
    clear_requested: Rc<RefCell<bool>>,
) {
    {
        let controller = controller.clone();
        dom::add_input_listener(document, "autoRotate", "change", move |input| {
            controller.borrow_mut().set_auto_rotate(input.checked());
        });
    }

    {
        let controller = controller.clone();
        let document_for_label = document.clone();
        dom::add_input_listener(document, "rotationSpeed", "input", move |input| {
            let raw = input.value();
            if let Ok(speed) = raw.parse::<f32>() {
                controller.borrow_mut().set_auto_rotate_speed(speed);
                dom::set_text_by_id(&document_for_label, "speedValue", &raw);
            }
        });
    }

    {
        let controller = controller.clone();
        dom::add_click_listener(document, "resetRotation", move || {
            controller.borrow_mut().reset_rotation();
        });
    }

    {
        let document_for_clear = document.clone();
        let clear_requested = clear_requested.clone();
        dom::add_click_listener(document, "clearImages", move || {
            *clear_requested.borrow_mut() = true;
            overlay::reset_face_ui(&document_for_clear);
            overlay::show_toast(&document_for_clear, "All images cleared");
            log::info!("[ui] all images cleared");
        });
    }

    {
        let document_for_help = document.clone();
        dom::add_click_listener(document, "mobileHelp", move || {
            overlay::show_help_modal(&document_for_help);
        });
    }

    for face in 0..FACE_COUNT {
        wire_face_button(document, face);

        let document_for_file = document.clone();
        let pending = pending.clone();
        dom::add_input_listener(document, &format!("file-{}", face), "change", move |input| {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                textures::load_face_image(&document_for_file, face, file, pending.clone());
            }
        });
    }
}

// A face button is just a proxy for its hidden file input.
fn wire_face_button(document: &web::Document, face: usize) {
    if let Ok(Some(button)) = document.query_selector(&format!("[data-face=\"{}\"]", face)) {
        let document = document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if let Some(el) = document.get_element_by_id(&format!("file-{}", face)) {
                if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                    html.click();
                }
            }
        }) as Box<dyn FnMut()>);
        _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
