use crate::paint::{LinearGradient, RadialGradient};
use crate::viewport::Viewport;
use glam::DVec2;

/// A 2D drawing target for one layer.
///
/// Implementations only need to clear, fill rectangles and circles with a
/// radial gradient, and stroke round-capped segments with a linear gradient.
pub trait DrawSurface {
    /// Set the backing-store size to the viewport's pixel dimensions.
    fn resize(&mut self, viewport: Viewport);

    fn clear(&mut self, viewport: Viewport);

    /// Fill the whole surface with `gradient`.
    fn fill_rect(&mut self, viewport: Viewport, gradient: &RadialGradient);

    fn fill_circle(&mut self, center: DVec2, radius: f64, gradient: &RadialGradient);

    /// Stroke a round-capped segment of `width` px.
    fn stroke_segment(&mut self, from: DVec2, to: DVec2, width: f64, gradient: &LinearGradient);
}
