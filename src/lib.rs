#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod frame;
mod mount;
mod render;

pub use mount::Background;

thread_local! {
    static BACKGROUND: RefCell<Option<Background>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    if let Err(e) = attach() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

/// Mount (or remount) the background behind the page.
#[wasm_bindgen(js_name = attachBackground)]
pub fn attach_background() -> Result<(), JsValue> {
    attach().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tear the background down. Safe to call when nothing is mounted.
#[wasm_bindgen(js_name = detachBackground)]
pub fn detach_background() {
    let previous = BACKGROUND.with(|slot| slot.borrow_mut().take());
    if let Some(mut bg) = previous {
        bg.detach();
    }
}

fn attach() -> anyhow::Result<()> {
    detach_background();
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let bg = Background::mount(&window, &document)?;
    BACKGROUND.with(|slot| *slot.borrow_mut() = Some(bg));
    Ok(())
}
