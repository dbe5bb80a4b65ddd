//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Vertex at a screen-space point
    pub fn at(p: DVec2, color: [f32; 4]) -> Self {
        Self::new(p.x as f32, p.y as f32, color)
    }
}

/// Colors for game elements
pub mod colors {
    pub const TERRAIN: [f32; 4] = [0.93, 0.95, 0.98, 1.0];
    pub const PLAYER: [f32; 4] = [0.95, 0.35, 0.25, 1.0];
    /// Far to near ridge layers
    pub const LAYERS: [[f32; 4]; 4] = [
        [0.55, 0.62, 0.75, 1.0],
        [0.45, 0.52, 0.66, 1.0],
        [0.36, 0.42, 0.56, 1.0],
        [0.27, 0.32, 0.45, 1.0],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let v = Vertex::new(1.0, 2.0, colors::PLAYER);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 24);
        assert_eq!(bytemuck::pod_read_unaligned::<Vertex>(bytes), v);
    }
}
