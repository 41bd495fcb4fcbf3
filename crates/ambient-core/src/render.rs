//! Layered drawing: a static gradient backdrop under a glow layer and a
//! streak layer, each on its own surface.

use crate::config::BackgroundConfig;
use crate::constants::{
    BACKDROP_AZURE, BACKDROP_DEEP_BLUE, BACKDROP_VIOLET, EDGE_ALPHA_DROP, STREAK_LINE_WIDTH,
};
use crate::motion::Heading;
use crate::paint::{ColorStop, LinearGradient, RadialGradient, Rgba};
use crate::particle::{GlowParticle, Population, StreakParticle};
use crate::surface::DrawSurface;
use crate::viewport::Viewport;

/// The three stacked surfaces, listed back to front.
pub struct Layers<S> {
    pub backdrop: S,
    pub glow: S,
    pub streak: S,
}

impl<S: DrawSurface> Layers<S> {
    pub fn new(backdrop: S, glow: S, streak: S) -> Self {
        Self {
            backdrop,
            glow,
            streak,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.backdrop.resize(viewport);
        self.glow.resize(viewport);
        self.streak.resize(viewport);
    }

    pub fn draw_backdrop(&mut self, viewport: Viewport) {
        draw_backdrop(&mut self.backdrop, viewport);
    }

    /// Redraw both particle layers. Inactive layers are left untouched.
    pub fn draw_particles(
        &mut self,
        config: &BackgroundConfig,
        viewport: Viewport,
        heading: Heading,
        population: &Population,
    ) {
        if config.glow.is_active() {
            draw_glow_layer(&mut self.glow, viewport, &population.glows);
        }
        if config.streak.is_active() {
            draw_streak_layer(&mut self.streak, viewport, heading, &population.streaks);
        }
    }
}

/// Backdrop gradients in paint order.
///
/// The first one is the left-anchored deep blue glow mirrored to the right
/// half of the screen.
pub fn backdrop_gradients(viewport: Viewport) -> [RadialGradient; 3] {
    let w = viewport.width;
    let deep = viewport.mirror_x(viewport.at(0.3, 0.1));
    let azure_inner = viewport.at(0.1, 0.1);
    let azure_outer = viewport.at(0.3, 0.1);
    let violet = viewport.at(0.1, 0.5);
    [
        RadialGradient::concentric(
            deep,
            w * 0.9,
            [
                ColorStop::new(0.0, Rgba::opaque(BACKDROP_DEEP_BLUE)),
                ColorStop::new(1.0, Rgba::TRANSPARENT),
            ],
        ),
        RadialGradient {
            inner_center: azure_inner,
            inner_radius: 0.0,
            outer_center: azure_outer,
            outer_radius: w,
            stops: [
                ColorStop::new(0.0, Rgba::opaque(BACKDROP_AZURE)),
                ColorStop::new(0.8, Rgba::TRANSPARENT),
            ],
        },
        RadialGradient::concentric(
            violet,
            w * 0.5,
            [
                ColorStop::new(0.0, Rgba::opaque(BACKDROP_VIOLET)),
                ColorStop::new(1.0, Rgba::TRANSPARENT),
            ],
        ),
    ]
}

pub fn draw_backdrop<S: DrawSurface + ?Sized>(surface: &mut S, viewport: Viewport) {
    surface.clear(viewport);
    for gradient in backdrop_gradients(viewport) {
        surface.fill_rect(viewport, &gradient);
    }
}

/// Full alpha at the center fading by [`EDGE_ALPHA_DROP`] toward the rim.
pub fn glow_gradient(particle: &GlowParticle) -> RadialGradient {
    RadialGradient::concentric(
        particle.position,
        particle.radius,
        [
            ColorStop::new(0.0, particle.color.with_alpha(particle.alpha)),
            ColorStop::new(1.0, particle.color.with_alpha(particle.alpha - EDGE_ALPHA_DROP)),
        ],
    )
}

pub fn streak_gradient(particle: &StreakParticle, heading: Heading) -> LinearGradient {
    LinearGradient {
        from: particle.position,
        to: particle.tip(heading),
        stops: [
            ColorStop::new(0.0, particle.color.with_alpha(particle.alpha)),
            ColorStop::new(1.0, particle.color.with_alpha(particle.alpha - EDGE_ALPHA_DROP)),
        ],
    }
}

pub fn draw_glow_layer<S: DrawSurface + ?Sized>(
    surface: &mut S,
    viewport: Viewport,
    glows: &[GlowParticle],
) {
    surface.clear(viewport);
    for glow in glows {
        surface.fill_circle(glow.position, glow.radius, &glow_gradient(glow));
    }
}

pub fn draw_streak_layer<S: DrawSurface + ?Sized>(
    surface: &mut S,
    viewport: Viewport,
    heading: Heading,
    streaks: &[StreakParticle],
) {
    surface.clear(viewport);
    for streak in streaks {
        let gradient = streak_gradient(streak, heading);
        surface.stroke_segment(gradient.from, gradient.to, STREAK_LINE_WIDTH, &gradient);
    }
}
