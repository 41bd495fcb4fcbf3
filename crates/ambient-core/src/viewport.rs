use glam::DVec2;

/// Current drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// Backing-store dimensions written to each surface.
    pub fn size_px(&self) -> (u32, u32) {
        (self.width.max(0.0) as u32, self.height.max(0.0) as u32)
    }

    /// Point at a fraction of the width/height.
    pub fn at(&self, fx: f64, fy: f64) -> DVec2 {
        DVec2::new(self.width * fx, self.height * fy)
    }

    /// Reflect a point across the vertical center line.
    pub fn mirror_x(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.width - p.x, p.y)
    }
}
