//! Side-scrolling camera
//!
//! Each axis either free-scrolls or eases toward a target. Easing uses a
//! per-frame factor `rate * dt` clamped to 1, so a long frame snaps to the
//! target instead of overshooting it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::settings::CameraParams;

/// Easing target for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follow {
    pub target: f64,
    /// Approach rate (1/s)
    pub rate: f64,
}

impl Follow {
    pub fn new(target: f64, rate: f64) -> Self {
        Self { target, rate }
    }
}

/// Move `current` toward `follow.target` by the clamped fraction `rate * dt`
#[inline]
pub fn approach(current: f64, follow: Follow, dt: f64) -> f64 {
    current + (follow.target - current) * (follow.rate * dt).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Top-left corner of the view in world space
    pub pos: DVec2,
    /// Free-scroll speed (pixels/s)
    pub speed: f64,
}

impl Camera {
    pub fn new(speed: f64) -> Self {
        Self {
            pos: DVec2::ZERO,
            speed,
        }
    }

    /// Advance the camera
    ///
    /// Without an x target the camera scrolls right at `speed`. Without a y
    /// target y holds still.
    pub fn update(&mut self, dt: f64, x: Option<Follow>, y: Option<Follow>) {
        self.pos.x = match x {
            Some(follow) => approach(self.pos.x, follow, dt),
            None => self.pos.x + self.speed * dt,
        };
        if let Some(follow) = y {
            self.pos.y = approach(self.pos.y, follow, dt);
        }
    }

    /// Follow targets that keep the player in frame
    ///
    /// x never falls behind where free-scrolling would have taken it, but
    /// catches up eagerly when the player pulls ahead.
    pub fn follow_targets(
        &self,
        dt: f64,
        player: DVec2,
        viewport: DVec2,
        params: &CameraParams,
    ) -> (Follow, Follow) {
        let free_scroll_x = self.pos.x + self.speed * dt;
        let target_x = free_scroll_x.max(player.x - viewport.x * params.lead_ratio);
        let target_y = player.y - viewport.y * params.vertical_ratio;
        (
            Follow::new(target_x, params.lerp_x),
            Follow::new(target_y, params.lerp_y),
        )
    }

    /// Ease toward the player using `follow_targets`
    pub fn follow_player(&mut self, dt: f64, player: DVec2, viewport: DVec2, params: &CameraParams) {
        let (x, y) = self.follow_targets(dt, player, viewport, params);
        self.update(dt, Some(x), Some(y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_scroll_is_linear() {
        let mut camera = Camera::new(160.0);
        for _ in 0..120 {
            camera.update(1.0 / 60.0, None, None);
        }
        assert!((camera.pos.x - 320.0).abs() < 1e-9);
        assert_eq!(camera.pos.y, 0.0);
    }

    #[test]
    fn test_follow_approaches_without_overshoot() {
        let mut camera = Camera::new(160.0);
        let follow = Follow::new(500.0, 4.0);
        let mut last_gap = 500.0;
        for _ in 0..300 {
            camera.update(1.0 / 60.0, Some(follow), Some(Follow::new(-200.0, 4.0)));
            let gap = follow.target - camera.pos.x;
            assert!(gap >= 0.0);
            assert!(gap < last_gap);
            last_gap = gap;
        }
        assert!(last_gap < 1e-3);
        assert!((camera.pos.y + 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_large_dt_snaps_to_target() {
        let mut camera = Camera::new(160.0);
        camera.update(2.0, Some(Follow::new(75.0, 4.0)), None);
        assert_eq!(camera.pos.x, 75.0);
    }

    #[test]
    fn test_follow_target_never_behind_free_scroll() {
        let camera = Camera {
            pos: DVec2::new(1000.0, 0.0),
            speed: 160.0,
        };
        let viewport = DVec2::new(1280.0, 800.0);
        let params = CameraParams::default();

        // Player far behind: free-scroll wins
        let (x, _) = camera.follow_targets(0.5, DVec2::new(0.0, 300.0), viewport, &params);
        assert_eq!(x.target, 1080.0);

        // Player ahead: lead offset wins
        let (x, y) = camera.follow_targets(0.5, DVec2::new(3000.0, 300.0), viewport, &params);
        assert!((x.target - (3000.0 - 1280.0 * 0.3)).abs() < 1e-9);
        assert!((y.target - (300.0 - 800.0 * 0.6)).abs() < 1e-9);
    }
}
