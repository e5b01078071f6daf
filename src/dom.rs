use crate::constants::{SCENE_CANVAS_ID, SCENE_CANVAS_STYLE};
use folio_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn viewport(window: &web::Window) -> Viewport {
    let size = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport {
        width: size(window.inner_width()),
        height: size(window.inner_height()),
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn document_height(document: &web::Document) -> f64 {
    document
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0)
}

/// Create the fixed, pointer-transparent background canvas inside `root`.
pub fn create_scene_canvas(
    document: &web::Document,
    root: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(SCENE_CANVAS_ID);
    _ = canvas.set_attribute("style", SCENE_CANVAS_STYLE);
    _ = canvas.set_attribute("aria-hidden", "true");
    root.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// Size the canvas backing store to CSS size times the clamped pixel ratio.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    viewport: &Viewport,
    max_pixel_ratio: f64,
) -> (u32, u32) {
    let (w, h) = viewport.backing_size(max_pixel_ratio);
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_child(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}
