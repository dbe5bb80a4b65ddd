//! Shape generation for 2D primitives
//!
//! All output is a triangle list in screen pixels (origin top-left, y down).

use glam::DVec2;
use std::f64::consts::TAU;

use super::vertex::Vertex;
use crate::background::SilhouetteImage;
use crate::sim::{Player, TerrainPoint};

/// Extra length of the spin indicator past the disc edge
const INDICATOR_OVERHANG: f64 = 8.0;
const INDICATOR_HALF_WIDTH: f64 = 1.5;

fn push_quad(out: &mut Vec<Vertex>, corners: [DVec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    out.extend([a, b, c, c, d, a].map(|p| Vertex::at(p, color)));
}

/// Ground polygon from the surface down to the bottom of the screen
pub fn terrain_fill(
    points: &[TerrainPoint],
    camera: DVec2,
    viewport_height: f64,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len().saturating_sub(1) * 6);
    for pair in points.windows(2) {
        let a = DVec2::new(pair[0].x as f64, pair[0].height) - camera;
        let b = DVec2::new(pair[1].x as f64, pair[1].height) - camera;
        push_quad(
            &mut vertices,
            [
                a,
                b,
                DVec2::new(b.x, viewport_height),
                DVec2::new(a.x, viewport_height),
            ],
            color,
        );
    }
    vertices
}

/// Player disc plus a spin indicator pointing "up" at angle 0
pub fn player_shapes(player: &Player, camera: DVec2, segments: usize, color: [f32; 4]) -> Vec<Vertex> {
    let segments = segments.max(3);
    let center = player.pos - camera;
    let r = player.radius();

    let mut vertices = Vec::with_capacity(segments * 3 + 6);
    for i in 0..segments {
        let a0 = TAU * i as f64 / segments as f64;
        let a1 = TAU * (i + 1) as f64 / segments as f64;
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + DVec2::from_angle(a0) * r, color));
        vertices.push(Vertex::at(center + DVec2::from_angle(a1) * r, color));
    }

    let dir = DVec2::from_angle((player.angle_deg - 90.0).to_radians());
    let end = center + dir * (r + INDICATOR_OVERHANG);
    let side = dir.perp() * INDICATOR_HALF_WIDTH;
    push_quad(
        &mut vertices,
        [center + side, end + side, end - side, center - side],
        color,
    );
    vertices
}

/// One tiled copy of a ridge silhouette, shifted to `offset_x`
pub fn ridge_fill(image: &SilhouetteImage, offset_x: i64, color: [f32; 4]) -> Vec<Vertex> {
    let bottom = image.height() as f64;
    let shift = DVec2::new(offset_x as f64, 0.0);
    let skyline = image.skyline();

    let mut vertices = Vec::with_capacity(skyline.len().saturating_sub(1) * 6);
    for pair in skyline.windows(2) {
        let a = pair[0] + shift;
        let b = pair[1] + shift;
        push_quad(
            &mut vertices,
            [a, b, DVec2::new(b.x, bottom), DVec2::new(a.x, bottom)],
            color,
        );
    }
    vertices
}
