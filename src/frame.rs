use crate::constants::STATS_INTERVAL_SEC;
use crate::events::DomUiSink;
use crate::orientation::{OrientationController, DEFAULT_ZOOM_DISTANCE};
use crate::overlay;
use crate::render;
use crate::textures;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick touches. One tick drains queued texture
/// uploads, advances the controller, pushes the presented orientation to
/// the GPU, renders, and keeps the FPS readout current.
pub struct FrameContext {
    pub controller: Rc<RefCell<OrientationController<DomUiSink>>>,
    pub gpu: Option<render::GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub pending_uploads: textures::PendingUploads,
    pub clear_requested: Rc<RefCell<bool>>,

    pub frame_count: u32,
    pub fps_window_start: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if let Some(g) = &mut self.gpu {
            if std::mem::take(&mut *self.clear_requested.borrow_mut()) {
                g.reset_face_images();
            }
            for img in self.pending_uploads.borrow_mut().drain(..) {
                g.set_face_image(img.face, img.width, img.height, &img.pixels);
            }
        }

        // Gesture events landed synchronously in their own callbacks, so
        // everything observed here is already integrated into the targets.
        {
            let mut controller = self.controller.borrow_mut();
            controller.advance();
            if let Some(g) = &mut self.gpu {
                controller.present(g);
            }
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }

        self.update_stats();
    }

    // FPS recomputed once per second rather than per frame.
    fn update_stats(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_window_start.elapsed().as_secs_f32();
        if elapsed >= STATS_INTERVAL_SEC {
            let fps = (self.frame_count as f32 / elapsed).round() as u32;
            overlay::update_stats(&self.document, fps);
            self.frame_count = 0;
            self.fps_window_start = Instant::now();
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, DEFAULT_ZOOM_DISTANCE).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
