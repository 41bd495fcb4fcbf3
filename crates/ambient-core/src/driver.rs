//! Frame loop owner: particle population, viewport, and the single
//! outstanding frame request.

use crate::config::BackgroundConfig;
use crate::error::EngineError;
use crate::motion::Heading;
use crate::particle::Population;
use crate::render::Layers;
use crate::scheduler::{FrameScheduler, FrameToken};
use crate::surface::DrawSurface;
use crate::viewport::Viewport;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// No frame scheduled: before start, after stop, or after a degraded start.
    Idle,
    /// Exactly one frame request outstanding.
    Running(FrameToken),
}

pub struct AnimationDriver<S, F, R> {
    config: BackgroundConfig,
    heading: Heading,
    viewport: Viewport,
    population: Population,
    layers: Option<Layers<S>>,
    scheduler: F,
    rng: R,
    state: DriverState,
    frames: u64,
}

impl<S, F, R> AnimationDriver<S, F, R>
where
    S: DrawSurface,
    F: FrameScheduler,
    R: Rng,
{
    /// `layers` is `None` when the host could not provide drawing contexts;
    /// the driver then stays Idle.
    pub fn new(config: BackgroundConfig, layers: Option<Layers<S>>, scheduler: F, rng: R) -> Self {
        Self {
            heading: config.heading(),
            config,
            viewport: Viewport::default(),
            population: Population::default(),
            layers,
            scheduler,
            rng,
            state: DriverState::Idle,
            frames: 0,
        }
    }

    /// Generate particles, paint the backdrop and schedule the first frame.
    /// Without surfaces this is a logged no-op.
    pub fn start(&mut self, viewport: Viewport) {
        log::info!(
            "[driver] start {}x{}",
            viewport.width as u32,
            viewport.height as u32
        );
        self.restart(viewport);
    }

    /// One animation step. Ignored unless Running.
    pub fn on_frame(&mut self) {
        if !self.is_running() {
            return;
        }
        let Some(layers) = self.layers.as_mut() else {
            self.state = DriverState::Idle;
            return;
        };
        self.population.advance(self.viewport, self.heading);
        layers.draw_particles(&self.config, self.viewport, self.heading, &self.population);
        self.frames += 1;
        // The request that invoked us has fired; this replaces its token.
        self.schedule();
    }

    /// Discard the population and restart against the new viewport.
    pub fn on_resize(&mut self, viewport: Viewport) {
        log::debug!(
            "[driver] resize {}x{}",
            viewport.width as u32,
            viewport.height as u32
        );
        self.restart(viewport);
    }

    /// Cancel the pending frame and go Idle. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.is_running() {
            log::info!("[driver] stop after {} frames", self.frames);
        }
        self.cancel_pending();
    }

    fn restart(&mut self, viewport: Viewport) {
        self.cancel_pending();
        self.viewport = viewport;
        let Some(layers) = self.layers.as_mut() else {
            log::warn!("[driver] not starting: {}", EngineError::MissingSurface);
            return;
        };
        layers.resize(viewport);
        self.heading = self.config.heading();
        self.population = Population::generate(viewport, &self.config, &mut self.rng);
        layers.draw_backdrop(viewport);
        self.schedule();
    }

    fn schedule(&mut self) {
        self.state = match self.scheduler.request() {
            Ok(token) => DriverState::Running(token),
            Err(e) => {
                log::warn!("[driver] {}", e);
                DriverState::Idle
            }
        };
    }

    fn cancel_pending(&mut self) {
        if let DriverState::Running(token) = std::mem::replace(&mut self.state, DriverState::Idle) {
            self.scheduler.cancel(token);
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running(_))
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn layers(&self) -> Option<&Layers<S>> {
        self.layers.as_ref()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Frames drawn since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
