//! Heads-up display statistics
//!
//! Text layout and fonts belong to the platform layer; this only captures
//! the numbers and formats the status line.

use crate::sim::GameState;

/// Snapshot of what the HUD shows this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStats {
    pub fps: f64,
    /// Horizontal speed (pixels/s)
    pub speed: f64,
    pub distance_m: f64,
    pub airtime: f64,
    pub score: u64,
}

impl HudStats {
    pub fn from_state(state: &GameState, fps: f64) -> Self {
        Self {
            fps,
            speed: state.player.vel.x,
            distance_m: state.distance_m(),
            airtime: state.stats.airtime,
            score: state.stats.score,
        }
    }

    pub fn fps_line(&self) -> String {
        format!("FPS {:.0}", self.fps)
    }

    pub fn line(&self) -> String {
        format!(
            "Spd {:4.0}  Dist {:.0}m  Air {:.1}s  Score {}",
            self.speed, self.distance_m, self.airtime, self.score
        )
    }

    /// Status line, prefixed with the FPS counter when enabled
    pub fn status(&self, show_fps: bool) -> String {
        if show_fps {
            format!("{}  {}", self.fps_line(), self.line())
        } else {
            self.line()
        }
    }
}
