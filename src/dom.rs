use crate::constants::{CANVAS_CLASS, CANVAS_STYLE, CONTAINER_ID, CONTAINER_STYLE};
use ambient_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Current `innerWidth` x `innerHeight`; zero if the host won't say.
pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn create_container(document: &web::Document) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?;
    el.set_id(CONTAINER_ID);
    el.set_attribute("style", CONTAINER_STYLE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(el)
}

pub fn create_canvas(
    document: &web::Document,
    layer: &str,
    z_index: usize,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_class_name(CANVAS_CLASS);
    _ = canvas.set_attribute("data-layer", layer);
    canvas
        .set_attribute("style", &format!("{CANVAS_STYLE};z-index:{z_index}"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Registers `handler` for `event` on the window. The returned closure must
/// be kept alive until it is removed with [`remove_window_listener`].
pub fn add_window_listener(
    window: &web::Window,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<Closure<dyn FnMut()>> {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {event} listener: {:?}", e))?;
    Ok(closure)
}

pub fn remove_window_listener(window: &web::Window, event: &str, closure: &Closure<dyn FnMut()>) {
    if let Err(e) =
        window.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("remove {} listener: {:?}", event, e);
    }
}
