//! Procedural terrain: analytic height/slope plus a render point cache
//!
//! The surface is a closed-form function of x: a constant downhill drift,
//! two hill harmonics and a fine ripple. Physics queries evaluate it directly
//! and have no side effects. The point cache only feeds ground polygons to
//! the renderer and is grown explicitly with `ensure_coverage`.

use serde::{Deserialize, Serialize};

use crate::settings::TerrainParams;

/// One cached surface sample on the render grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainPoint {
    pub x: i64,
    pub height: f64,
}

/// Endless 1D heightfield
#[derive(Debug, Clone)]
pub struct TerrainModel {
    params: TerrainParams,
    baseline: f64,
    /// x of the first point ever generated; anchors the drift term and the grid
    drift_origin: Option<i64>,
    /// Sorted by x, spaced exactly `segment_width` apart
    points: Vec<TerrainPoint>,
}

impl TerrainModel {
    /// Create terrain with an empty cache
    pub fn new(params: TerrainParams, baseline: f64) -> Self {
        log::info!(
            "Terrain seed {} baseline {} amplitude {}",
            params.seed,
            baseline,
            params.amplitude
        );
        Self {
            params: TerrainParams {
                segment_width: params.segment_width.max(1),
                ..params
            },
            baseline,
            drift_origin: None,
            points: Vec::new(),
        }
    }

    pub fn seed(&self) -> i64 {
        self.params.seed
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn segment_width(&self) -> i64 {
        self.params.segment_width
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn drift_origin(&self) -> Option<i64> {
        self.drift_origin
    }

    /// Surface y at world x
    ///
    /// Before any point has been generated the drift has no anchor, so the
    /// flat baseline is returned.
    pub fn sample_height(&self, x: f64) -> f64 {
        match self.drift_origin {
            Some(origin) => self.height_at(x, origin as f64),
            None => self.baseline,
        }
    }

    /// Exact dy/dx at world x (termwise derivative of `sample_height`)
    pub fn sample_slope(&self, x: f64) -> f64 {
        if self.drift_origin.is_none() {
            return 0.0;
        }
        let p = &self.params;
        let hills = p.hill_freq1 * (x * p.hill_freq1).cos()
            + p.hill_weight2 * p.hill_freq2 * (x * p.hill_freq2).cos();
        let micro = p.micro_amplitude * p.micro_freq * (x * p.micro_freq).cos();
        p.downhill_slope_per_px + p.amplitude * hills + micro
    }

    fn height_at(&self, x: f64, origin: f64) -> f64 {
        let p = &self.params;
        let drift = (x - origin) * p.downhill_slope_per_px;
        let hills = (x * p.hill_freq1).sin() + p.hill_weight2 * (x * p.hill_freq2).sin();
        let micro = p.micro_amplitude * (x * p.micro_freq).sin();
        self.baseline + drift + p.amplitude * hills + micro
    }

    fn point_at(&self, x: i64, origin: i64) -> TerrainPoint {
        TerrainPoint {
            x,
            height: self.height_at(x as f64, origin as f64),
        }
    }

    /// Grow the cache until it spans at least `[start_x, end_x]`
    ///
    /// Existing points are never recomputed. The first call anchors the grid
    /// and the drift at `floor(start_x)`. A single-point range covers that
    /// point; inverted ranges are a no-op.
    pub fn ensure_coverage(&mut self, start_x: f64, end_x: f64) {
        if !(start_x.is_finite() && end_x.is_finite()) || end_x < start_x {
            return;
        }
        let step = self.params.segment_width;
        let start = start_x.floor() as i64;
        let end = end_x.ceil() as i64;

        let origin = match self.drift_origin {
            Some(origin) => origin,
            None => {
                let point = self.point_at(start, start);
                self.drift_origin = Some(start);
                self.points.push(point);
                start
            }
        };

        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first.x, last.x),
            _ => return,
        };

        if last < end {
            let count = (end - last + step - 1) / step;
            self.points.reserve(count as usize);
            for k in 1..=count {
                let point = self.point_at(last + k * step, origin);
                self.points.push(point);
            }
            log::debug!("Terrain extended forward to x={}", last + count * step);
        }

        if first > start {
            let count = (first - start + step - 1) / step;
            let prefix: Vec<TerrainPoint> = (1..=count)
                .rev()
                .map(|k| self.point_at(first - k * step, origin))
                .collect();
            self.points.splice(0..0, prefix);
            log::debug!("Terrain extended backward to x={}", first - count * step);
        }
    }

    /// Whole cache, ordered by x
    pub fn points(&self) -> &[TerrainPoint] {
        &self.points
    }

    /// Cached x-span, if any point exists
    pub fn coverage(&self) -> Option<(i64, i64)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    /// Cached points covering `[start_x, end_x]`, with one point of margin on
    /// each side when the cache has it
    pub fn visible_points(&self, start_x: f64, end_x: f64) -> &[TerrainPoint] {
        if self.points.is_empty() || end_x < start_x {
            return &[];
        }
        let lo = self
            .points
            .partition_point(|p| (p.x as f64) < start_x)
            .saturating_sub(1);
        let hi = (self.points.partition_point(|p| (p.x as f64) <= end_x) + 1).min(self.points.len());
        &self.points[lo..hi.max(lo)]
    }
}
