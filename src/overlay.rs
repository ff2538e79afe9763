use crate::constants::{CUBE_TRIANGLE_COUNT, DEFAULT_FACE_COLORS_HEX, FACE_COUNT, TOAST_DURATION_MS};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const TOAST_STYLE: &str = "position:fixed;top:20px;left:50%;transform:translateX(-50%);\
background:rgba(78,205,196,0.9);color:white;padding:12px 20px;border-radius:25px;\
font-size:14px;font-weight:bold;z-index:10000;box-shadow:0 4px 12px rgba(0,0,0,0.3)";

/// Transient notification banner, removed again after two seconds.
pub fn show_toast(document: &web::Document, message: &str) {
    let toast = match document.create_element("div") {
        Ok(el) => el,
        Err(_) => return,
    };
    toast.set_text_content(Some(message));
    _ = toast.set_attribute("style", TOAST_STYLE);
    if let Some(body) = document.body() {
        _ = body.append_child(&toast);
    }
    let toast_for_removal = toast.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        toast_for_removal.remove();
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TOAST_DURATION_MS,
        );
    }
    closure.forget();
}

/// Updates the status label and button highlight for one face slot.
pub fn set_face_status(document: &web::Document, face: usize, text: &str, loaded: bool) {
    if let Some(el) = document.get_element_by_id(&format!("status-{}", face)) {
        let short = if loaded && text.chars().count() > 20 {
            let head: String = text.chars().take(17).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        };
        let label = if loaded {
            format!("\u{2713} {}", short)
        } else {
            short
        };
        el.set_text_content(Some(&label));
        let color = if loaded { "#4ecdc4" } else { "#e74c3c" };
        _ = el.set_attribute("style", &format!("color:{}", color));
    }
    if let Ok(Some(button)) = document.query_selector(&format!("[data-face=\"{}\"]", face)) {
        let cl = button.class_list();
        if loaded {
            _ = cl.add_1("loaded");
        } else {
            _ = cl.remove_1("loaded");
        }
    }
}

pub fn set_face_preview(document: &web::Document, face: usize, src: &str) {
    if let Some(el) = document.get_element_by_id(&format!("preview-{}", face)) {
        if let Some(img) = el.dyn_ref::<web::HtmlImageElement>() {
            img.set_src(src);
            _ = img.class_list().add_1("loaded");
        }
    }
}

/// Restores every face slot to its no-image state: neutral status text,
/// default-color SVG placeholder, cleared file input.
pub fn reset_face_ui(document: &web::Document) {
    for face in 0..FACE_COUNT {
        set_face_status(document, face, "No image loaded", false);
        if let Some(el) = document.get_element_by_id(&format!("preview-{}", face)) {
            if let Some(img) = el.dyn_ref::<web::HtmlImageElement>() {
                img.set_src(&format!(
                    "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' \
width='60' height='60'%3E%3Crect width='60' height='60' fill='%23{}'/%3E%3C/svg%3E",
                    DEFAULT_FACE_COLORS_HEX[face]
                ));
                _ = img.class_list().remove_1("loaded");
            }
        }
        if let Some(el) = document.get_element_by_id(&format!("file-{}", face)) {
            if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                input.set_value("");
            }
        }
    }
}

pub fn update_stats(document: &web::Document, fps: u32) {
    dom::set_text_by_id(document, "fps", &fps.to_string());
    dom::set_text_by_id(document, "triangles", &CUBE_TRIANGLE_COUNT.to_string());
}

/// Coarse-pointer detection; touch instructions and the help button only
/// make sense on devices that will actually send touch events.
pub fn is_touch_device() -> bool {
    web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false)
}

/// Swaps the instruction list for touch wording and reveals the help button.
pub fn apply_touch_instructions(document: &web::Document) {
    if let Ok(Some(el)) = document.query_selector(".instructions ul") {
        el.set_inner_html(
            "<li>Tap face buttons to load images</li>\
<li><strong>Single finger:</strong> Drag to rotate cube</li>\
<li><strong>Two fingers:</strong> Pinch to zoom in/out</li>\
<li><strong>Double tap:</strong> Reset rotation</li>\
<li>Toggle auto-rotation with checkbox</li>\
<li>Adjust speed with the slider</li>\
<li>Supports PNG, JPG, GIF, WebP formats</li>",
        );
    }
    if let Some(el) = document.get_element_by_id("mobileHelp") {
        _ = el.set_attribute("style", "display:block");
    }
}

pub fn show_help_modal(document: &web::Document) {
    let modal = match document.create_element("div") {
        Ok(el) => el,
        Err(_) => return,
    };
    _ = modal.set_attribute("id", "help-modal");
    _ = modal.set_attribute(
        "style",
        "position:fixed;top:0;left:0;width:100%;height:100%;\
background:rgba(0,0,0,0.8);z-index:10001;display:flex;\
justify-content:center;align-items:center",
    );
    modal.set_inner_html(
        "<div style='background:#2b2b2b;border-radius:15px;padding:20px;max-width:90%;\
max-height:80%;overflow-y:auto;color:white'>\
<h3 style='color:#4ecdc4;margin-bottom:15px'>Touch Controls</h3>\
<ul style='margin:10px 0;padding-left:20px'>\
<li><strong>Single finger drag:</strong> Rotate the cube</li>\
<li><strong>Two finger pinch:</strong> Zoom in/out</li>\
<li><strong>Double tap:</strong> Reset rotation</li>\
</ul>\
<ul style='margin:10px 0;padding-left:20px'>\
<li>Tap colored face buttons to load images</li>\
<li>Toggle auto-rotation on/off</li>\
<li>Adjust rotation speed with slider</li>\
</ul>\
<button id='closeHelp' style='background:#4ecdc4;color:white;border:none;\
padding:10px 20px;border-radius:8px;font-weight:bold;margin-top:15px;\
width:100%;cursor:pointer'>Got it</button></div>",
    );
    if let Some(body) = document.body() {
        _ = body.append_child(&modal);
    }

    let modal_for_close = modal.clone();
    dom::add_click_listener(document, "closeHelp", move || {
        modal_for_close.remove();
    });

    // Clicking the backdrop (but not the content) also dismisses.
    let modal_for_backdrop = modal.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let hit_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.id() == "help-modal")
            .unwrap_or(false);
        if hit_backdrop {
            modal_for_backdrop.remove();
        }
    }) as Box<dyn FnMut(_)>);
    _ = modal.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
