use ambient_core::constants::FALLBACK_FRAME_INTERVAL_MS;
use ambient_core::{AnimationDriver, EngineError, FrameScheduler, FrameToken};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::CanvasSurface;

pub type WebDriver = AnimationDriver<CanvasSurface, RafScheduler, StdRng>;

/// Shared slot for the JS frame callback. The scheduler reads it on every
/// request; the host fills it once the driver exists and empties it on detach.
pub type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameSource {
    AnimationFrame,
    /// `setTimeout` at ~60/s for hosts without `requestAnimationFrame`.
    Timer,
}

pub struct RafScheduler {
    window: web::Window,
    callback: FrameSlot,
    source: FrameSource,
}

impl RafScheduler {
    pub fn new(window: web::Window, callback: FrameSlot) -> Self {
        let has_raf =
            js_sys::Reflect::has(&window, &"requestAnimationFrame".into()).unwrap_or(false);
        let source = if has_raf {
            FrameSource::AnimationFrame
        } else {
            log::warn!("requestAnimationFrame unavailable; using a timer");
            FrameSource::Timer
        };
        Self {
            window,
            callback,
            source,
        }
    }

    pub fn source(&self) -> FrameSource {
        self.source
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self) -> Result<FrameToken, EngineError> {
        let slot = self.callback.borrow();
        let Some(closure) = slot.as_ref() else {
            return Err(EngineError::ScheduleRejected("frame callback not bound".into()));
        };
        let f: &js_sys::Function = closure.as_ref().unchecked_ref();
        let id = match self.source {
            FrameSource::AnimationFrame => self.window.request_animation_frame(f),
            FrameSource::Timer => self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    f,
                    FALLBACK_FRAME_INTERVAL_MS,
                ),
        }
        .map_err(|e| EngineError::ScheduleRejected(format!("{:?}", e)))?;
        Ok(FrameToken(id))
    }

    fn cancel(&mut self, token: FrameToken) {
        match self.source {
            FrameSource::AnimationFrame => {
                _ = self.window.cancel_animation_frame(token.0);
            }
            FrameSource::Timer => self.window.clear_timeout_with_handle(token.0),
        }
    }
}

/// Install the frame callback. It holds the driver weakly so dropping the
/// host's handle frees everything even if a frame is still queued.
pub fn bind_frame_callback(slot: &FrameSlot, driver: Weak<RefCell<WebDriver>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(driver) = driver.upgrade() {
            driver.borrow_mut().on_frame();
        }
    }) as Box<dyn FnMut()>);
    *slot.borrow_mut() = Some(closure);
}
