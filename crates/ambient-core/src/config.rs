//! Compile-time configuration of the two particle layers.

use crate::motion::Heading;
use crate::paint::Rgb;

/// One particle layer (glows or streaks).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerConfig {
    pub amount: u32,
    pub tiers: u32,
    pub color: Rgb,
    pub alpha: f64,
}

impl LayerConfig {
    /// A layer with no particles or no tiers is skipped by generation and drawing.
    pub const fn is_active(&self) -> bool {
        self.amount > 0 && self.tiers > 0
    }

    /// Particles per tier; any remainder of `amount / tiers` is dropped.
    pub const fn per_tier(&self) -> u32 {
        if self.is_active() {
            self.amount / self.tiers
        } else {
            0
        }
    }

    /// Number of particles a generation pass produces for this layer.
    pub const fn population(&self) -> usize {
        (self.per_tier() * self.tiers) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub glow: LayerConfig,
    pub streak: LayerConfig,
    /// Base distance travelled per frame (px) by tier 0.
    pub speed: f64,
    /// Motion heading in degrees; 0 points straight up, positive turns right.
    pub angle_deg: f64,
}

impl BackgroundConfig {
    pub const DEFAULT: Self = Self {
        glow: LayerConfig {
            amount: 18,
            tiers: 3,
            color: Rgb::new(157, 97, 207),
            alpha: 0.3,
        },
        streak: LayerConfig {
            amount: 12,
            tiers: 3,
            color: Rgb::new(255, 255, 255),
            alpha: 0.3,
        },
        speed: 0.5,
        angle_deg: 20.0,
    };

    pub fn heading(&self) -> Heading {
        Heading::from_degrees(self.angle_deg)
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
