//! Per-frame drift along a fixed heading with toroidal wrap at the edges.
//!
//! Every particle moves by `speed` along the same heading each frame. When a
//! coordinate leaves the viewport by more than the particle's own extent it is
//! moved to the opposite side, again one extent outside, so shapes slide out
//! and back in without popping.

use crate::viewport::Viewport;
use glam::DVec2;

/// Sine/cosine of the motion angle, computed once per population.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heading {
    pub sin: f64,
    pub cos: f64,
}

impl Heading {
    pub fn from_degrees(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { sin, cos }
    }

    /// Displacement over one frame. Screen y grows downward, so the vertical
    /// component is subtracted.
    #[inline]
    pub fn step(&self, speed: f64) -> DVec2 {
        DVec2::new(self.sin * speed, -self.cos * speed)
    }

    /// Footprint of a segment of `length` laid along the heading, per axis.
    #[inline]
    pub fn footprint(&self, length: f64) -> DVec2 {
        DVec2::new((self.sin * length).abs(), (self.cos * length).abs())
    }
}

/// One axis of the motion field: wrap if the coordinate is past either
/// inflated bound, otherwise advance by `delta`.
#[inline]
pub fn wrap_or_advance(pos: f64, limit: f64, extent: f64, delta: f64) -> f64 {
    if pos > limit + extent {
        -extent
    } else if pos < -extent {
        limit + extent
    } else {
        pos + delta
    }
}

/// Both axes at once; `extent` is the per-axis visual footprint.
#[inline]
pub fn advance(position: DVec2, extent: DVec2, step: DVec2, viewport: Viewport) -> DVec2 {
    DVec2::new(
        wrap_or_advance(position.x, viewport.width, extent.x, step.x),
        wrap_or_advance(position.y, viewport.height, extent.y, step.y),
    )
}
