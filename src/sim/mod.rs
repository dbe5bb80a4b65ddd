//! Simulation core
//!
//! Frame-stepped and single-threaded. Given the same settings and the same
//! sequence of inputs and frame times, a run replays identically:
//! - Terrain height/slope are closed-form functions of x
//! - Noise is a pure hash of (seed, lattice index)
//! - No rendering or platform dependencies

pub mod camera;
pub mod noise;
pub mod player;
pub mod state;
pub mod terrain;
pub mod tick;

pub use camera::{Camera, Follow};
pub use noise::{DEFAULT_OCTAVES, NoiseField, smootherstep};
pub use player::{Buttons, Contact, Player, Transition};
pub use state::{GameEvent, GameState, RunStats};
pub use terrain::{TerrainModel, TerrainPoint};
pub use tick::{TickInput, tick};
