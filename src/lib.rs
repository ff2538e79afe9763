#![cfg(target_arch = "wasm32")]
use crate::events::DomUiSink;
use crate::gesture::GestureInputTracker;
use crate::orientation::OrientationController;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod gesture;
mod orientation;
mod overlay;
mod render;
mod textures;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cube-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("cube-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #cube-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    // WebGPU must acquire the canvas before any 2D context touches it
    let gpu = frame::init_gpu(&canvas).await;

    // ---------------- Interaction state ----------------
    let tracker = Rc::new(RefCell::new(GestureInputTracker::new()));
    let controller = Rc::new(RefCell::new(OrientationController::new(DomUiSink::new(
        document.clone(),
    ))));
    let pending_uploads: textures::PendingUploads = Rc::new(RefCell::new(Vec::new()));
    let clear_requested = Rc::new(RefCell::new(false));

    // Canvas gesture surface (pointer/touch/wheel)
    events::wire_input_handlers(&events::InputWiring {
        canvas: canvas.clone(),
        tracker,
        controller: controller.clone(),
    });

    // Control panel
    events::ui::wire_ui_controls(
        &document,
        controller.clone(),
        pending_uploads.clone(),
        clear_requested.clone(),
    );

    _ = canvas.style().set_property("cursor", "grab");
    if let Some(stats) = document.get_element_by_id("stats") {
        _ = stats.set_attribute("style", "display:block");
    }
    if overlay::is_touch_device() {
        overlay::apply_touch_instructions(&document);
        overlay::show_toast(
            &document,
            "Touch controls enabled! Double-tap to reset rotation",
        );
    }

    log::info!("cube viewer initialized");

    // Renderer loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        gpu,
        canvas,
        document,
        pending_uploads,
        clear_requested,
        frame_count: 0,
        fps_window_start: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
