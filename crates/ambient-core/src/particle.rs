//! Glow and streak particles and the generation pass that populates both layers.

use crate::config::{BackgroundConfig, LayerConfig};
use crate::constants::{
    ALPHA_JITTER, ALPHA_STEP_PER_TIER, SIZE_BASE, SIZE_STEP_PER_TIER, SPEED_STEP_PER_TIER,
};
use crate::motion::{self, Heading};
use crate::paint::Rgb;
use crate::viewport::Viewport;
use glam::DVec2;
use rand::Rng;

/// Soft circular glow drawn as a filled radial gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowParticle {
    pub position: DVec2,
    pub radius: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub speed: f64,
    pub tier: u32,
}

impl GlowParticle {
    pub fn extent(&self) -> DVec2 {
        DVec2::splat(self.radius)
    }

    pub fn advance(&mut self, viewport: Viewport, heading: Heading) {
        self.position = motion::advance(
            self.position,
            self.extent(),
            heading.step(self.speed),
            viewport,
        );
    }
}

/// Short directional streak: a segment from `position` along the heading.
#[derive(Clone, Debug, PartialEq)]
pub struct StreakParticle {
    pub position: DVec2,
    pub length: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub speed: f64,
    pub tier: u32,
}

impl StreakParticle {
    pub fn extent(&self, heading: Heading) -> DVec2 {
        heading.footprint(self.length)
    }

    /// Far end of the segment.
    pub fn tip(&self, heading: Heading) -> DVec2 {
        DVec2::new(
            self.position.x + heading.sin * self.length,
            self.position.y - heading.cos * self.length,
        )
    }

    pub fn advance(&mut self, viewport: Viewport, heading: Heading) {
        self.position = motion::advance(
            self.position,
            self.extent(heading),
            heading.step(self.speed),
            viewport,
        );
    }
}

/// Lower bound of a tier's size range; sizes fall in `[floor, 2 * floor)`.
pub fn tier_size_floor(tier: u32) -> f64 {
    SIZE_BASE + tier as f64 * SIZE_STEP_PER_TIER
}

/// Lower bound of a tier's alpha range; alphas fall in `[floor, floor + 0.2)`.
pub fn tier_alpha_floor(layer_alpha: f64, tier: u32) -> f64 {
    layer_alpha - tier as f64 * ALPHA_STEP_PER_TIER
}

pub fn tier_speed(base_speed: f64, tier: u32) -> f64 {
    base_speed * (1.0 + tier as f64 * SPEED_STEP_PER_TIER)
}

struct Spawn {
    position: DVec2,
    size: f64,
    alpha: f64,
    speed: f64,
    tier: u32,
}

fn spawn_layer<R: Rng + ?Sized>(
    layer: &LayerConfig,
    base_speed: f64,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<Spawn> {
    let mut out = Vec::with_capacity(layer.population());
    // Tiers are interleaved so deeper (faster) particles don't all draw on top.
    for _ in 0..layer.per_tier() {
        for tier in 0..layer.tiers {
            let position = DVec2::new(
                rng.gen::<f64>() * viewport.width,
                rng.gen::<f64>() * viewport.height,
            );
            let floor = tier_size_floor(tier);
            let size = rng.gen::<f64>() * floor + floor;
            let alpha = rng.gen::<f64>() * ALPHA_JITTER + tier_alpha_floor(layer.alpha, tier);
            out.push(Spawn {
                position,
                size,
                alpha,
                speed: tier_speed(base_speed, tier),
                tier,
            });
        }
    }
    out
}

/// Both particle collections; replaced wholesale on every regeneration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    pub glows: Vec<GlowParticle>,
    pub streaks: Vec<StreakParticle>,
}

impl Population {
    pub fn generate<R: Rng + ?Sized>(
        viewport: Viewport,
        config: &BackgroundConfig,
        rng: &mut R,
    ) -> Self {
        let glows = spawn_layer(&config.glow, config.speed, viewport, rng)
            .into_iter()
            .map(|s| GlowParticle {
                position: s.position,
                radius: s.size,
                color: config.glow.color,
                alpha: s.alpha,
                speed: s.speed,
                tier: s.tier,
            })
            .collect();
        let streaks = spawn_layer(&config.streak, config.speed, viewport, rng)
            .into_iter()
            .map(|s| StreakParticle {
                position: s.position,
                length: s.size,
                color: config.streak.color,
                alpha: s.alpha,
                speed: s.speed,
                tier: s.tier,
            })
            .collect();
        Self { glows, streaks }
    }

    /// One frame of motion for every particle.
    pub fn advance(&mut self, viewport: Viewport, heading: Heading) {
        for glow in &mut self.glows {
            glow.advance(viewport, heading);
        }
        for streak in &mut self.streaks {
            streak.advance(viewport, heading);
        }
    }

    pub fn len(&self) -> usize {
        self.glows.len() + self.streaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glows.is_empty() && self.streaks.is_empty()
    }
}

/// Fresh population for `viewport`; returns `(glows, streaks)`.
pub fn generate_population<R: Rng + ?Sized>(
    viewport: Viewport,
    config: &BackgroundConfig,
    rng: &mut R,
) -> (Vec<GlowParticle>, Vec<StreakParticle>) {
    let Population { glows, streaks } = Population::generate(viewport, config, rng);
    (glows, streaks)
}
