//! Alto - a downhill side-scroller over endless procedural terrain
//!
//! Core modules:
//! - `sim`: Simulation core (noise, terrain, player physics, camera, frame tick)
//! - `background`: Precomputed parallax ridge layers
//! - `renderer`: GPU-ready geometry built from simulation state
//! - `hud`: Run statistics snapshot for the heads-up display
//! - `settings`: Data-driven tuning, loadable from JSON

pub mod background;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use hud::HudStats;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default viewport size in pixels
    pub const VIEWPORT_WIDTH: u32 = 1280;
    pub const VIEWPORT_HEIGHT: u32 = 800;

    /// Largest dt a single tick will integrate (frame hitch guard)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Terrain shape
    pub const TERRAIN_SEED: i64 = 4242;
    pub const TERRAIN_BASELINE_RATIO: f64 = 0.5;
    pub const TERRAIN_AMPLITUDE: f64 = 90.0;
    pub const TERRAIN_SEGMENT_WIDTH: i64 = 16;
    /// Long-range descent; screen y grows downward so downhill is positive
    pub const DOWNHILL_SLOPE_PER_PX: f64 = 0.12;
    pub const HILL_FREQ1: f64 = 0.0025;
    pub const HILL_FREQ2: f64 = 0.0071;
    pub const HILL_WEIGHT2: f64 = 0.35;
    pub const MICRO_SINE_AMPL: f64 = 4.0;
    pub const MICRO_SINE_FREQ: f64 = 0.045;

    /// Player
    pub const PLAYER_RADIUS: f64 = 20.0;
    pub const GRAVITY: f64 = 1800.0;
    pub const JUMP_SPEED: f64 = 700.0;
    pub const MAX_SPEED: f64 = 1400.0;
    pub const MIN_FORWARD_SPEED: f64 = 180.0;
    pub const SLOPE_ACCEL: f64 = 900.0;
    pub const ROTATE_SPEED_DEG: f64 = 540.0;
    pub const PLAYER_START_X: f64 = 100.0;
    pub const PLAYER_START_Y_RATIO: f64 = 0.4;

    /// Camera
    pub const BASE_SCROLL_SPEED: f64 = 160.0;
    pub const CAMERA_LERP: f64 = 4.0;
    /// Player sits this fraction of the viewport width from the left edge
    pub const CAMERA_LEAD_RATIO: f64 = 0.3;
    /// Player sits this fraction of the viewport height from the top edge
    pub const CAMERA_VERTICAL_RATIO: f64 = 0.6;

    /// Parallax
    pub const PARALLAX_SEED: u64 = 1337;
    pub const LAYER_SPEEDS: [f64; 4] = [0.15, 0.3, 0.5, 0.7];
    pub const RIDGE_STEP: u32 = 24;

    /// Score accrues this many points per airborne second past the threshold
    pub const AIRTIME_POINTS_PER_SEC: f64 = 10.0;
    pub const AIRTIME_SCORE_THRESHOLD: f64 = 1.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(725.0) - 5.0).abs() < 1e-9);
        assert!((wrap_degrees(-90.0) - 270.0).abs() < 1e-9);
        assert!(wrap_degrees(-1e-20) < 360.0);
    }
}
