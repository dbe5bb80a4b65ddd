//! Variable timestep simulation tick
//!
//! One call per rendered frame: player, then camera, then run statistics,
//! then terrain cache upkeep for the renderer.

use super::player::{Buttons, Transition};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump/spin button held
    pub button_down: bool,
    /// Button went down this frame
    pub button_pressed: bool,
}

impl From<TickInput> for Buttons {
    fn from(input: TickInput) -> Self {
        Buttons {
            down: input.button_down,
            pressed: input.button_pressed,
        }
    }
}

/// Clamp frame time into [0, MAX_FRAME_DT]
fn sanitize_dt(dt: f64) -> f64 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring invalid frame dt {}", dt);
        return 0.0;
    }
    dt.min(MAX_FRAME_DT)
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) -> Vec<GameEvent> {
    let dt = sanitize_dt(dt);
    let mut events = Vec::new();

    let terrain = &state.terrain;
    let transition = state.player.update(
        dt,
        Buttons::from(*input),
        |x| terrain.sample_height(x),
        |x| terrain.sample_slope(x),
    );

    state
        .camera
        .follow_player(dt, state.player.pos, state.viewport, &state.camera_params);

    let stats = &mut state.stats;
    stats.ticks += 1;
    stats.elapsed += dt;
    stats.distance += state.player.vel.x.max(0.0) * dt;

    match transition {
        Some(Transition::Jumped) => events.push(GameEvent::Jumped),
        Some(Transition::Landed) => events.push(GameEvent::Landed {
            airtime: stats.airtime,
        }),
        Some(Transition::LeftGround) => events.push(GameEvent::LeftGround),
        None => {}
    }

    if state.player.on_ground() {
        stats.airtime = 0.0;
    } else {
        stats.airtime += dt;
        if stats.airtime > AIRTIME_SCORE_THRESHOLD {
            stats.score_accum += AIRTIME_POINTS_PER_SEC * dt;
            let total = stats.score_accum.floor() as u64;
            if total > stats.score {
                events.push(GameEvent::TrickScored {
                    points: total - stats.score,
                });
                stats.score = total;
            }
        }
    }

    let (start, end) = state.render_span();
    state.terrain.ensure_coverage(start, end);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    const DT: f64 = 1.0 / 60.0;

    fn press() -> TickInput {
        TickInput {
            button_down: true,
            button_pressed: true,
        }
    }

    fn hold() -> TickInput {
        TickInput {
            button_down: true,
            button_pressed: false,
        }
    }

    fn run_until_grounded(state: &mut GameState) {
        for _ in 0..600 {
            tick(state, &TickInput::default(), DT);
            if state.player.on_ground() {
                return;
            }
        }
        panic!("player never landed");
    }

    #[test]
    fn test_spawn_falls_and_lands() {
        let mut state = GameState::new(&Settings::default());
        let mut landed = None;
        for _ in 0..600 {
            let events = tick(&mut state, &TickInput::default(), DT);
            if let Some(GameEvent::Landed { airtime }) = events.first() {
                landed = Some(*airtime);
                break;
            }
        }
        let airtime = landed.expect("player should land");
        assert!(airtime > 0.0);
        let ground = state.terrain.sample_height(state.player.pos.x) - state.player.radius();
        assert_eq!(state.player.pos.y, ground);
        assert_eq!(state.stats.airtime, 0.0);
    }

    #[test]
    fn test_jump_event_only_on_press() {
        let mut state = GameState::new(&Settings::default());

        // Downhill runs can briefly lose contact, so retry until a press lands
        let mut jumped = false;
        for _ in 0..100 {
            run_until_grounded(&mut state);
            let was_grounded = state.player.on_ground();
            let events = tick(&mut state, &press(), DT);
            if events.contains(&GameEvent::Jumped) {
                assert!(was_grounded);
                jumped = true;
                break;
            }
        }
        assert!(jumped);
        assert_eq!(state.player.vel.y, -JUMP_SPEED);

        let mut jumps = 0;
        for _ in 0..300 {
            let events = tick(&mut state, &hold(), DT);
            jumps += events.iter().filter(|e| **e == GameEvent::Jumped).count();
        }
        assert_eq!(jumps, 0);
    }

    #[test]
    fn test_distance_accumulates() {
        let mut state = GameState::new(&Settings::default());
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), DT);
        }
        let min = MIN_FORWARD_SPEED * 2.0;
        assert!(state.stats.distance >= min - 1e-6);
        assert!((state.stats.elapsed - 2.0).abs() < 1e-9);
        assert_eq!(state.stats.ticks, 120);
    }

    #[test]
    fn test_camera_keeps_player_in_view() {
        let mut state = GameState::new(&Settings::default());
        for _ in 0..1200 {
            tick(&mut state, &TickInput::default(), DT);
        }
        let screen_x = state.player.pos.x - state.camera.pos.x;
        assert!(screen_x > 0.0 && screen_x < state.viewport.x);
    }

    #[test]
    fn test_terrain_covers_render_span() {
        let mut state = GameState::new(&Settings::default());
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), DT);
        }
        let (start, end) = state.render_span();
        let (first, last) = state.terrain.coverage().unwrap();
        assert!(first as f64 <= start && last as f64 >= end);
    }

    #[test]
    fn test_airtime_scores() {
        let mut settings = Settings::default();
        // Ground far below so the player stays airborne
        settings.terrain.baseline_ratio = 1_000.0;
        let mut state = GameState::new(&settings);

        let mut points = 0;
        for _ in 0..180 {
            for event in tick(&mut state, &TickInput::default(), DT) {
                if let GameEvent::TrickScored { points: p } = event {
                    points += p;
                }
            }
        }
        // 2 s scoring after a 1 s threshold at 10 pts/s
        assert!(state.stats.airtime > 2.9);
        assert!(state.stats.score >= 19 && state.stats.score <= 20);
        assert_eq!(points, state.stats.score);
    }

    #[test]
    fn test_invalid_dt_is_ignored() {
        let mut state = GameState::new(&Settings::default());
        let before = state.player.pos;
        tick(&mut state, &TickInput::default(), f64::NAN);
        tick(&mut state, &TickInput::default(), -1.0);
        assert_eq!(state.player.pos, before);
        assert_eq!(state.stats.elapsed, 0.0);
    }

    #[test]
    fn test_huge_dt_is_clamped() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &TickInput::default(), 5.0);
        assert!((state.stats.elapsed - MAX_FRAME_DT).abs() < 1e-12);
    }

    #[test]
    fn test_negative_max_speed_from_settings() {
        let settings = Settings::from_json(r#"{"player":{"max_speed":-1.0}}"#).unwrap();
        let mut state = GameState::new(&settings);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.player.vel.x, MIN_FORWARD_SPEED);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(&Settings::default());
        let mut b = GameState::new(&Settings::default());
        let inputs = [TickInput::default(), press(), hold(), hold(), TickInput::default()];
        for _ in 0..50 {
            for input in &inputs {
                let ea = tick(&mut a, input, DT);
                let eb = tick(&mut b, input, DT);
                assert_eq!(ea, eb);
            }
        }
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.camera.pos, b.camera.pos);
        assert_eq!(a.stats, b.stats);
        assert_eq!(a.terrain.points(), b.terrain.points());
    }
}
