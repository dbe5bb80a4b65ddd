//! Render geometry
//!
//! Turns simulation state into screen-space triangle lists. Uploading and
//! drawing them is left to the platform layer.

pub mod shapes;
pub mod vertex;

pub use shapes::{player_shapes, ridge_fill, terrain_fill};
pub use vertex::{Vertex, colors};
