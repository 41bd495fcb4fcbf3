//! Color and gradient value types.
//!
//! The renderer describes every fill and stroke with these plain values; a
//! [`DrawSurface`](crate::surface::DrawSurface) turns them into whatever its
//! backend understands (CSS color strings and `CanvasGradient`s on the web).

use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

/// Color plus an unclamped alpha. Tier arithmetic may push `alpha` outside
/// `[0, 1]`; it is clamped only when the color is realized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgb::new(0, 0, 0).with_alpha(0.0);

    pub const fn opaque(rgb: Rgb) -> Self {
        rgb.with_alpha(1.0)
    }

    pub fn clamped_alpha(&self) -> f64 {
        if self.alpha.is_nan() {
            0.0
        } else {
            self.alpha.clamp(0.0, 1.0)
        }
    }

    /// CSS `rgba(r,g,b,a)` form with the alpha clamped to `[0, 1]`.
    pub fn css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.rgb.r,
            self.rgb.g,
            self.rgb.b,
            self.clamped_alpha()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Two-circle radial gradient, same model as `createRadialGradient`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner_center: DVec2,
    pub inner_radius: f64,
    pub outer_center: DVec2,
    pub outer_radius: f64,
    pub stops: [ColorStop; 2],
}

impl RadialGradient {
    /// Concentric gradient from `center` out to `radius`.
    pub fn concentric(center: DVec2, radius: f64, stops: [ColorStop; 2]) -> Self {
        Self {
            inner_center: center,
            inner_radius: 0.0,
            outer_center: center,
            outer_radius: radius,
            stops,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: DVec2,
    pub to: DVec2,
    pub stops: [ColorStop; 2],
}
