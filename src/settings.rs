//! Game settings and tuning
//!
//! Every gameplay constant is data here so a run can be retuned from a JSON
//! file without rebuilding. Missing fields fall back to the defaults in
//! `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Terrain shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Run seed (the hill profile itself is a fixed sinusoid)
    pub seed: i64,
    /// Spacing of cached render points in world units
    pub segment_width: i64,
    /// Baseline y as a fraction of viewport height
    pub baseline_ratio: f64,
    pub amplitude: f64,
    pub downhill_slope_per_px: f64,
    pub hill_freq1: f64,
    pub hill_freq2: f64,
    pub hill_weight2: f64,
    pub micro_amplitude: f64,
    pub micro_freq: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: TERRAIN_SEED,
            segment_width: TERRAIN_SEGMENT_WIDTH,
            baseline_ratio: TERRAIN_BASELINE_RATIO,
            amplitude: TERRAIN_AMPLITUDE,
            downhill_slope_per_px: DOWNHILL_SLOPE_PER_PX,
            hill_freq1: HILL_FREQ1,
            hill_freq2: HILL_FREQ2,
            hill_weight2: HILL_WEIGHT2,
            micro_amplitude: MICRO_SINE_AMPL,
            micro_freq: MICRO_SINE_FREQ,
        }
    }
}

/// Player physics parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerParams {
    pub radius: f64,
    /// Downward acceleration (pixels/s²)
    pub gravity: f64,
    pub jump_speed: f64,
    pub max_speed: f64,
    /// Horizontal speed can never drop below this
    pub min_forward_speed: f64,
    /// Horizontal acceleration per unit of slope
    pub slope_accel: f64,
    /// Spin rate while airborne with the button held (degrees/s)
    pub rotate_speed_deg: f64,
    pub start_x: f64,
    /// Spawn y as a fraction of viewport height
    pub start_y_ratio: f64,
}

impl Default for PlayerParams {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            max_speed: MAX_SPEED,
            min_forward_speed: MIN_FORWARD_SPEED,
            slope_accel: SLOPE_ACCEL,
            rotate_speed_deg: ROTATE_SPEED_DEG,
            start_x: PLAYER_START_X,
            start_y_ratio: PLAYER_START_Y_RATIO,
        }
    }
}

/// Camera follow parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Free-scroll speed (pixels/s)
    pub scroll_speed: f64,
    pub lerp_x: f64,
    pub lerp_y: f64,
    pub lead_ratio: f64,
    pub vertical_ratio: f64,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            scroll_speed: BASE_SCROLL_SPEED,
            lerp_x: CAMERA_LERP,
            lerp_y: CAMERA_LERP,
            lead_ratio: CAMERA_LEAD_RATIO,
            vertical_ratio: CAMERA_VERTICAL_RATIO,
        }
    }
}

/// Parallax ridge generation parameters
///
/// Per-layer lists are indexed by layer and cycle when shorter than `speeds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxParams {
    pub seed: u64,
    pub speeds: Vec<f64>,
    pub base_y_ratios: Vec<f64>,
    pub peak_ratios: Vec<f64>,
    pub roughness: Vec<f64>,
    /// Horizontal distance between ridge vertices
    pub step: u32,
    /// Image width as a multiple of viewport width
    pub width_multiple: u32,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            seed: PARALLAX_SEED,
            speeds: LAYER_SPEEDS.to_vec(),
            base_y_ratios: vec![0.70, 0.76, 0.82, 0.88],
            peak_ratios: vec![0.10, 0.12, 0.14, 0.16],
            roughness: vec![0.5, 0.6, 0.7, 0.8],
            step: RIDGE_STEP,
            width_multiple: 3,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Show FPS counter
    pub show_fps: bool,
    pub terrain: TerrainParams,
    pub player: PlayerParams,
    pub camera: CameraParams,
    pub parallax: ParallaxParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            show_fps: true,
            terrain: TerrainParams::default(),
            player: PlayerParams::default(),
            camera: CameraParams::default(),
            parallax: ParallaxParams::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON (absent fields take defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Terrain baseline y in pixels
    pub fn terrain_baseline(&self) -> f64 {
        (self.viewport_height as f64 * self.terrain.baseline_ratio).floor()
    }
}
