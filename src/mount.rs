use crate::constants::LAYER_NAMES;
use crate::dom;
use crate::frame::{self, FrameSlot, RafScheduler, WebDriver};
use crate::render;
use ambient_core::{AnimationDriver, BackgroundConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// The mounted background element. Owns the DOM nodes, the resize listener
/// and the driver; [`Background::detach`] (or drop) undoes all of it once.
pub struct Background {
    window: web::Window,
    container: web::Element,
    driver: Rc<RefCell<WebDriver>>,
    frame_callback: FrameSlot,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

impl Background {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let container = dom::create_container(document)?;
        let mut canvases = Vec::with_capacity(LAYER_NAMES.len());
        for (z, name) in LAYER_NAMES.iter().enumerate() {
            let canvas = dom::create_canvas(document, name, z)?;
            container
                .append_child(&canvas)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            canvases.push(canvas);
        }
        let canvases: [web::HtmlCanvasElement; 3] = canvases
            .try_into()
            .map_err(|_| anyhow::anyhow!("expected three layer canvases"))?;
        body.append_child(&container)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let layers = render::layers_for(&canvases);
        let frame_callback: FrameSlot = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler::new(window.clone(), frame_callback.clone());
        let driver = Rc::new(RefCell::new(AnimationDriver::new(
            BackgroundConfig::DEFAULT,
            layers,
            scheduler,
            StdRng::from_entropy(),
        )));
        frame::bind_frame_callback(&frame_callback, Rc::downgrade(&driver));

        let driver_resize = driver.clone();
        let window_resize = window.clone();
        let resize_listener = dom::add_window_listener(window, "resize", move || {
            let viewport = dom::viewport(&window_resize);
            driver_resize.borrow_mut().on_resize(viewport);
        });
        let resize_listener = match resize_listener {
            Ok(l) => l,
            Err(e) => {
                container.remove();
                return Err(e);
            }
        };

        driver.borrow_mut().start(dom::viewport(window));
        log::info!(
            "[background] mounted ({:?})",
            driver.borrow().scheduler().source()
        );

        Ok(Self {
            window: window.clone(),
            container,
            driver,
            frame_callback,
            resize_listener: Some(resize_listener),
        })
    }

    /// Stop the loop, remove the listener and the element. Only the first
    /// call does anything.
    pub fn detach(&mut self) {
        let Some(listener) = self.resize_listener.take() else {
            return;
        };
        self.driver.borrow_mut().stop();
        dom::remove_window_listener(&self.window, "resize", &listener);
        self.frame_callback.borrow_mut().take();
        self.container.remove();
        log::info!(
            "[background] detached after {} frames",
            self.driver.borrow().frames()
        );
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.detach();
    }
}
