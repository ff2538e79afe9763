use crate::constants::FACE_NAMES;
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Decoded RGBA pixels waiting for GPU upload on the next tick. Decode is
/// async (FileReader + image element); the frame loop drains the queue so
/// texture uploads happen with the GPU state in hand.
pub struct PendingFaceImage {
    pub face: usize,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

pub type PendingUploads = Rc<RefCell<Vec<PendingFaceImage>>>;

/// Reads a chosen file as a data URL, decodes it through an image element
/// and a scratch 2D canvas, and queues the pixels for upload. UI status and
/// preview update on completion; failures mark the face slot and keep the
/// previous texture.
pub fn load_face_image(
    document: &web::Document,
    face: usize,
    file: web::File,
    pending: PendingUploads,
) {
    let file_name = file.name();
    let reader = match web::FileReader::new() {
        Ok(r) => r,
        Err(e) => {
            log::error!("[faces] FileReader error: {:?}", e);
            return;
        }
    };
    let reader_for_load = reader.clone();
    let document = document.clone();
    let onload = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let data_url = match reader_for_load.result() {
            Ok(v) => match v.as_string() {
                Some(s) => s,
                None => return,
            },
            Err(_) => return,
        };
        decode_and_queue(&document, face, &file_name, data_url, pending.clone());
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    if let Err(e) = reader.read_as_data_url(&file) {
        log::error!("[faces] read_as_data_url error: {:?}", e);
    }
}

fn decode_and_queue(
    document: &web::Document,
    face: usize,
    file_name: &str,
    data_url: String,
    pending: PendingUploads,
) {
    let img = match web::HtmlImageElement::new() {
        Ok(i) => i,
        Err(e) => {
            log::error!("[faces] HtmlImageElement error: {:?}", e);
            return;
        }
    };

    let img_for_load = img.clone();
    let document_for_load = document.clone();
    let file_name_owned = file_name.to_string();
    let data_url_for_preview = data_url.clone();
    let onload = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        match read_pixels(&img_for_load) {
            Ok((width, height, pixels)) => {
                pending.borrow_mut().push(PendingFaceImage {
                    face,
                    width,
                    height,
                    pixels,
                });
                overlay::set_face_status(&document_for_load, face, &file_name_owned, true);
                overlay::set_face_preview(&document_for_load, face, &data_url_for_preview);
                if overlay::is_touch_device() {
                    overlay::show_toast(
                        &document_for_load,
                        &format!("{} face loaded!", FACE_NAMES[face]),
                    );
                }
                log::info!(
                    "[faces] loaded texture for {} face: {}",
                    FACE_NAMES[face],
                    file_name_owned
                );
            }
            Err(e) => {
                log::error!("[faces] decode error for face {}: {:?}", face, e);
                overlay::set_face_status(&document_for_load, face, "Error loading image", false);
            }
        }
    }) as Box<dyn FnMut(_)>);
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let document_for_error = document.clone();
    let onerror = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        log::error!("[faces] image decode failed for face {}", face);
        overlay::set_face_status(&document_for_error, face, "Error loading image", false);
    }) as Box<dyn FnMut(_)>);
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    img.set_src(&data_url);
}

// Rasterizes a decoded image into RGBA bytes via an offscreen 2D canvas.
fn read_pixels(img: &web::HtmlImageElement) -> anyhow::Result<(u32, u32, Vec<u8>)> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("scratch element is not a canvas"))?;
    let width = img.natural_width().max(1);
    let height = img.natural_height().max(1);
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("context is not 2d"))?;
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((width, height, data.data().0))
}
