//! Alto entry point
//!
//! Windowing and input devices live in the platform layer. Natively this runs
//! a headless session with a scripted jump pattern and logs the HUD, which is
//! handy for tuning.
//!
//! Usage: `alto [settings.json] [frames]`

use alto::background::ParallaxBackground;
use alto::renderer::{colors, player_shapes, ridge_fill, terrain_fill};
use alto::sim::{GameEvent, GameState, TickInput, tick};
use alto::{HudStats, Settings};

const FRAME_DT: f64 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 60 * 30;
/// Scripted input: press at the start of each cycle, hold for a while
const INPUT_CYCLE: u64 = 150;
const HOLD_FRAMES: u64 = 50;

fn scripted_input(frame: u64) -> TickInput {
    let phase = frame % INPUT_CYCLE;
    TickInput {
        button_down: phase < HOLD_FRAMES,
        button_pressed: phase == 0,
    }
}

fn main() {
    env_logger::init();
    log::info!("Alto (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|s| match s.parse::<u64>() {
            Ok(n) => Some(n),
            Err(e) => {
                log::warn!("Invalid frame count {:?}: {}", s, e);
                None
            }
        })
        .unwrap_or(DEFAULT_FRAMES);

    let mut state = GameState::new(&settings);
    let background = ParallaxBackground::new(
        &settings.parallax,
        settings.viewport_width,
        settings.viewport_height,
    );

    let mut jumps = 0u32;
    let mut best_air = 0.0f64;
    for frame in 0..frames {
        for event in tick(&mut state, &scripted_input(frame), FRAME_DT) {
            log::debug!("frame {}: {:?}", frame, event);
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::Landed { airtime } => best_air = best_air.max(airtime),
                _ => {}
            }
        }

        if frame % 60 == 0 {
            let (start, end) = state.render_span();
            let ground = terrain_fill(
                state.terrain.visible_points(start, end),
                state.camera.pos,
                state.viewport.y,
                colors::TERRAIN,
            );
            let ridges: usize = background
                .blits(state.camera.pos.x)
                .into_iter()
                .map(|(i, x)| {
                    let color = colors::LAYERS[i % colors::LAYERS.len()];
                    ridge_fill(&background.layers()[i].image, x, color).len()
                })
                .sum();
            let player = player_shapes(&state.player, state.camera.pos, 24, colors::PLAYER);

            let hud = HudStats::from_state(&state, 1.0 / FRAME_DT);
            log::info!(
                "{} | verts ground={} ridges={} player={}",
                hud.status(settings.show_fps),
                ground.len(),
                ridges,
                player.len()
            );
        }
    }

    let hud = HudStats::from_state(&state, 1.0 / FRAME_DT);
    println!("{}", hud.status(settings.show_fps));
    println!(
        "{} frames, {} jumps, best airtime {:.2}s, terrain cache {} points",
        frames,
        jumps,
        best_air,
        state.terrain.points().len()
    );
}
