//! Parallax ridge background
//!
//! Each layer is a silhouette generated once at startup by a ridge walk over
//! the value-noise field, then tiled horizontally at a fraction of camera
//! speed. Layers never change after generation.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::ParallaxParams;
use crate::sim::noise::{DEFAULT_OCTAVES, NoiseField};

/// Noise frequency per ridge step for the broad undulation term
const RIDGE_FBM_FREQ: f64 = 0.37;

/// Inputs for one ridge walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeSpec {
    pub width: u32,
    pub height: u32,
    /// Resting skyline y
    pub base_y: f64,
    /// Largest rise above `base_y`
    pub peak_height: f64,
    /// Low-pass factor in (0, 1]; higher follows targets more tightly
    pub roughness: f64,
    pub step: u32,
    pub seed: i64,
}

/// Filled silhouette: skyline polyline plus per-column fill rows
#[derive(Debug, Clone, PartialEq)]
pub struct SilhouetteImage {
    width: u32,
    height: u32,
    skyline: Vec<DVec2>,
    /// First filled row of each pixel column
    column_tops: Vec<u32>,
}

impl SilhouetteImage {
    /// Walk a seamless skyline and rasterize it down to the image bottom
    ///
    /// The image width is rounded up to a whole number of steps so the last
    /// vertex lands on the wrap point.
    pub fn generate(spec: &RidgeSpec) -> Self {
        let step = spec.step.max(1);
        let steps = spec.width.max(1).div_ceil(step);
        let width = steps * step;
        let height = spec.height.max(1);
        let roughness = spec.roughness.clamp(f64::EPSILON, 1.0);
        let noise = NoiseField::new(spec.seed);

        let sample = |k: u32| {
            let fbm = noise.fbm(k as f64 * RIDGE_FBM_FREQ, DEFAULT_OCTAVES) * 0.5 + 0.5;
            0.5 * noise.hash01(k as i64) + 0.5 * fbm
        };
        let mut y = spec.base_y;
        let mut walk = |k: u32| {
            let target = spec.base_y - spec.peak_height * (0.3 + 0.7 * sample(k % steps));
            y += (target - y) * roughness;
            y.clamp(0.0, (height - 1) as f64)
        };

        // Warm-up lap so the filter state at the seam matches the start
        for k in 0..steps {
            walk(k);
        }
        let mut skyline: Vec<DVec2> = (0..=steps)
            .map(|k| DVec2::new((k * step) as f64, walk(k)))
            .collect();
        let first_y = skyline[0].y;
        if let Some(last) = skyline.last_mut() {
            last.y = first_y;
        }

        let column_tops = (0..width)
            .map(|c| {
                let xc = c as f64 + 0.5;
                let i = ((xc / step as f64) as usize).min(steps as usize - 1);
                let (a, b) = (skyline[i], skyline[i + 1]);
                let t = (xc - a.x) / (b.x - a.x);
                let top = a.y + (b.y - a.y) * t;
                (top.ceil() as u32).min(height - 1)
            })
            .collect();

        Self {
            width,
            height,
            skyline,
            column_tops,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Skyline vertices from x=0 to x=width
    pub fn skyline(&self) -> &[DVec2] {
        &self.skyline
    }

    pub fn column_top(&self, x: u32) -> Option<u32> {
        self.column_tops.get(x as usize).copied()
    }

    pub fn is_filled(&self, x: u32, y: u32) -> bool {
        y < self.height && self.column_top(x).is_some_and(|top| y >= top)
    }
}

/// One scrolling layer
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    pub image: SilhouetteImage,
    /// Fraction of camera speed
    pub speed: f64,
    pub seed: i64,
}

impl ParallaxLayer {
    /// Horizontal draw offset in [0, width)
    pub fn scroll_offset(&self, camera_x: f64) -> i64 {
        let w = self.image.width() as i64;
        (-((camera_x * self.speed).floor() as i64)).rem_euclid(w)
    }

    /// Screen x of every copy needed to cover `[0, viewport_width)`
    ///
    /// Ordered left to right: left wrap (if any), center, right wrap (if any).
    pub fn tile_offsets(&self, camera_x: f64, viewport_width: u32) -> Vec<i64> {
        let w = self.image.width() as i64;
        let offset = self.scroll_offset(camera_x);
        let mut blits = Vec::with_capacity(3);
        if offset > 0 {
            blits.push(offset - w);
        }
        blits.push(offset);
        if offset + w < viewport_width as i64 {
            blits.push(offset + w);
        }
        blits
    }
}

/// All background layers, back to front
#[derive(Debug, Clone)]
pub struct ParallaxBackground {
    layers: Vec<ParallaxLayer>,
    viewport_width: u32,
}

impl ParallaxBackground {
    /// Generate every layer for a viewport
    pub fn new(params: &ParallaxParams, viewport_width: u32, viewport_height: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(params.seed);
        let h = viewport_height as f64;
        let pick = |values: &[f64], i: usize, fallback: f64| {
            if values.is_empty() {
                fallback
            } else {
                values[i % values.len()]
            }
        };

        let layers: Vec<ParallaxLayer> = params
            .speeds
            .iter()
            .enumerate()
            .map(|(i, &speed)| {
                let seed = rng.random::<u32>() as i64;
                let spec = RidgeSpec {
                    width: viewport_width.saturating_mul(params.width_multiple.max(1)),
                    height: viewport_height,
                    base_y: (h * pick(&params.base_y_ratios, i, 0.8)).floor(),
                    peak_height: (h * pick(&params.peak_ratios, i, 0.1)).floor(),
                    roughness: pick(&params.roughness, i, 0.5),
                    step: params.step,
                    seed,
                };
                ParallaxLayer {
                    image: SilhouetteImage::generate(&spec),
                    speed,
                    seed,
                }
            })
            .collect();

        log::info!(
            "Generated {} parallax layers ({}x{})",
            layers.len(),
            layers.first().map_or(0, |l| l.image.width()),
            viewport_height
        );

        Self {
            layers,
            viewport_width,
        }
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    /// `(layer index, screen x)` for every blit this frame, back to front
    pub fn blits(&self, camera_x: f64) -> Vec<(usize, i64)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .tile_offsets(camera_x, self.viewport_width)
                    .into_iter()
                    .map(move |x| (i, x))
            })
            .collect()
    }
}
