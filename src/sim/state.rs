//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`; there is no
//! module-level state.

use glam::DVec2;

use super::camera::Camera;
use super::player::Player;
use super::terrain::TerrainModel;
use crate::settings::{CameraParams, Settings};

/// Something that happened during a tick, for audio/HUD hooks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Jumped,
    /// Touched down; `airtime` is how long the player was off the ground
    Landed { airtime: f64 },
    /// Went airborne over a crest without jumping
    LeftGround,
    /// Airtime bonus paid out
    TrickScored { points: u64 },
}

/// Accumulated run statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// World units travelled forward
    pub distance: f64,
    /// Seconds since last ground contact
    pub airtime: f64,
    pub score: u64,
    /// Fractional score not yet paid out
    pub score_accum: f64,
    /// Simulated seconds
    pub elapsed: f64,
    pub ticks: u64,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub viewport: DVec2,
    pub player: Player,
    pub camera: Camera,
    pub camera_params: CameraParams,
    pub terrain: TerrainModel,
    pub stats: RunStats,
}

impl GameState {
    /// Create a fresh run from settings
    pub fn new(settings: &Settings) -> Self {
        let viewport = DVec2::new(
            settings.viewport_width as f64,
            settings.viewport_height as f64,
        );

        let mut terrain = TerrainModel::new(settings.terrain, settings.terrain_baseline());
        terrain.ensure_coverage(0.0, viewport.x * 3.0);

        let start = DVec2::new(
            settings.player.start_x,
            viewport.y * settings.player.start_y_ratio,
        );
        let player = Player::new(start, settings.player);

        log::info!(
            "New run: viewport {}x{}, player at ({}, {})",
            viewport.x,
            viewport.y,
            start.x,
            start.y
        );

        Self {
            viewport,
            player,
            camera: Camera::new(settings.camera.scroll_speed),
            camera_params: settings.camera,
            terrain,
            stats: RunStats::default(),
        }
    }

    /// Distance in HUD metres
    pub fn distance_m(&self) -> f64 {
        self.stats.distance / 10.0
    }

    /// World x-range the renderer should have terrain for this frame
    pub fn render_span(&self) -> (f64, f64) {
        (
            self.camera.pos.x - self.viewport.x,
            self.camera.pos.x + self.viewport.x * 2.0,
        )
    }
}
