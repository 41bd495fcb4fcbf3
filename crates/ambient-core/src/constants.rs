use crate::paint::Rgb;

// Shared visual tuning constants for generation and drawing.

// Particle sizing (px). Tier `t` draws from [floor, 2 * floor) with
// floor = SIZE_BASE + t * SIZE_STEP_PER_TIER.
pub const SIZE_BASE: f64 = 20.0;
pub const SIZE_STEP_PER_TIER: f64 = 5.0;

// Alpha
pub const ALPHA_JITTER: f64 = 0.2; // random spread added on top of the tier floor
pub const ALPHA_STEP_PER_TIER: f64 = 0.1; // deeper tiers are fainter
pub const EDGE_ALPHA_DROP: f64 = 0.1; // gradient falloff between first and last stop

// Speed multiplier per tier: speed * (1 + t * SPEED_STEP_PER_TIER)
pub const SPEED_STEP_PER_TIER: f64 = 0.5;

// Streaks
pub const STREAK_LINE_WIDTH: f64 = 3.0;

// Timer fallback when the refresh-linked frame primitive is unavailable (~60/s)
pub const FALLBACK_FRAME_INTERVAL_MS: i32 = 1000 / 60;

// Backdrop palette
pub const BACKDROP_DEEP_BLUE: Rgb = Rgb::new(0, 26, 77);
pub const BACKDROP_AZURE: Rgb = Rgb::new(0, 150, 240);
pub const BACKDROP_VIOLET: Rgb = Rgb::new(40, 20, 105);
