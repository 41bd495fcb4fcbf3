use ambient_core::{ColorStop, DrawSurface, Layers, LinearGradient, RadialGradient, Viewport};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One `<canvas>` and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas has no 2D context to give.
    pub fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

/// Wrap the three canvases (back to front). Any missing context leaves the
/// whole background undrawn rather than partially drawn.
pub fn layers_for(canvases: &[web::HtmlCanvasElement; 3]) -> Option<Layers<CanvasSurface>> {
    let [backdrop, glow, streak] = canvases;
    match (
        CanvasSurface::new(backdrop),
        CanvasSurface::new(glow),
        CanvasSurface::new(streak),
    ) {
        (Some(b), Some(g), Some(s)) => Some(Layers::new(b, g, s)),
        _ => {
            log::warn!("[render] 2d context unavailable; background disabled");
            None
        }
    }
}

fn add_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
    for stop in stops {
        if let Err(e) = gradient.add_color_stop(stop.offset as f32, &stop.color.css()) {
            log::debug!("add_color_stop: {:?}", e);
        }
    }
}

impl CanvasSurface {
    fn radial(&self, g: &RadialGradient) -> Option<web::CanvasGradient> {
        let gradient = self
            .ctx
            .create_radial_gradient(
                g.inner_center.x,
                g.inner_center.y,
                g.inner_radius,
                g.outer_center.x,
                g.outer_center.y,
                g.outer_radius,
            )
            .ok()?;
        add_stops(&gradient, &g.stops);
        Some(gradient)
    }

    fn linear(&self, g: &LinearGradient) -> web::CanvasGradient {
        let gradient = self
            .ctx
            .create_linear_gradient(g.from.x, g.from.y, g.to.x, g.to.y);
        add_stops(&gradient, &g.stops);
        gradient
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        let (w, h) = viewport.size_px();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_rect(&mut self, viewport: Viewport, gradient: &RadialGradient) {
        let Some(fill) = self.radial(gradient) else {
            return;
        };
        self.ctx.begin_path();
        #[allow(deprecated)]
        self.ctx.set_fill_style(&fill);
        self.ctx
            .fill_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, gradient: &RadialGradient) {
        // Negative radii make `arc` and the gradient throw
        if radius <= 0.0 {
            return;
        }
        let Some(fill) = self.radial(gradient) else {
            return;
        };
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        #[allow(deprecated)]
        self.ctx.set_fill_style(&fill);
        self.ctx.fill();
    }

    fn stroke_segment(&mut self, from: DVec2, to: DVec2, width: f64, gradient: &LinearGradient) {
        let stroke = self.linear(gradient);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_line_width(width);
        self.ctx.set_line_cap("round");
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&stroke);
        self.ctx.stroke();
    }
}
