//! Hashed value noise over a 1D lattice
//!
//! Everything here is a pure function of `(seed, x)`. The same seed always
//! produces the same field, which is what lets the background art be
//! regenerated identically on every run.

use serde::{Deserialize, Serialize};

/// Octave count used when callers don't care
pub const DEFAULT_OCTAVES: u32 = 4;

/// 2^32, so hashes map onto [0, 1) rather than [0, 1]
const HASH_RANGE: f64 = 4_294_967_296.0;

/// Cubic Hermite easing `3t² - 2t³`
///
/// Has zero slope at both ends, so noise built from it has a continuous
/// first derivative across lattice points.
#[inline]
pub fn smootherstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Deterministic value-noise field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseField {
    seed: i64,
}

impl NoiseField {
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Avalanche hash of a lattice index, mapped to [0, 1)
    pub fn hash01(&self, i: i64) -> f64 {
        // Truncating casts keep the low 32 bits, same as masking
        let mut h = (i ^ (i >> 16)) as u32;
        h = h
            .wrapping_mul(2_246_822_519)
            .wrapping_add(1_013_904_223)
            .wrapping_add((self.seed as u32).wrapping_mul(374_761_393));
        h ^= h >> 13;
        h = h.wrapping_mul(3_266_489_917);
        h ^= h >> 16;
        h as f64 / HASH_RANGE
    }

    /// Smoothed noise in [-1, 1], interpolating hashed lattice values
    pub fn value_noise(&self, x: f64) -> f64 {
        let xi = x.floor();
        let xf = x - xi;
        let i = xi as i64;
        let a = self.hash01(i) * 2.0 - 1.0;
        let b = self.hash01(i.wrapping_add(1)) * 2.0 - 1.0;
        a + (b - a) * smootherstep(xf)
    }

    /// Fractal sum of `octaves` noise layers at doubling frequency and halving
    /// weight, normalized back into [-1, 1]
    pub fn fbm(&self, x: f64, octaves: u32) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.value_noise(x * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        if max_amplitude > 0.0 {
            total / max_amplitude
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hash01_is_deterministic_and_in_unit_range(seed in any::<i64>(), i in any::<i64>()) {
            let field = NoiseField::new(seed);
            let h = field.hash01(i);
            prop_assert!((0.0..1.0).contains(&h));
            prop_assert_eq!(h, NoiseField::new(seed).hash01(i));
        }

        #[test]
        fn value_noise_stays_in_range(seed in any::<i32>(), x in -1.0e6f64..1.0e6) {
            let v = NoiseField::new(seed as i64).value_noise(x);
            prop_assert!((-1.0..=1.0).contains(&v));
        }

        #[test]
        fn fbm_is_normalized(seed in any::<i32>(), x in -1.0e4f64..1.0e4, octaves in 1u32..10) {
            let v = NoiseField::new(seed as i64).fbm(x, octaves);
            prop_assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_value_noise_hits_lattice_values() {
        let field = NoiseField::new(4242);
        for i in -5..5 {
            let expected = field.hash01(i) * 2.0 - 1.0;
            assert!((field.value_noise(i as f64) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_value_noise_is_continuous_across_lattice() {
        let field = NoiseField::new(7);
        let left = field.value_noise(3.0 - 1e-9);
        let right = field.value_noise(3.0 + 1e-9);
        assert!((left - right).abs() < 1e-6);
    }

    #[test]
    fn test_value_noise_flat_at_lattice() {
        // Smootherstep has zero slope at t=0 and t=1
        let field = NoiseField::new(99);
        let h = 1e-5;
        let d = (field.value_noise(10.0 + h) - field.value_noise(10.0)) / h;
        assert!(d.abs() < 1e-3);
    }

    #[test]
    fn test_single_octave_fbm_matches_value_noise() {
        let field = NoiseField::new(12345);
        for x in [0.25, 1.5, -7.75, 100.125] {
            assert!((field.fbm(x, 1) - field.value_noise(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_octaves() {
        assert_eq!(NoiseField::new(1).fbm(3.3, 0), 0.0);
    }

    #[test]
    fn test_seed_changes_field() {
        let a = NoiseField::new(1337);
        let b = NoiseField::new(1438);
        let differs = (0..32).any(|i| a.hash01(i) != b.hash01(i));
        assert!(differs);
    }

    #[test]
    fn test_smootherstep_endpoints() {
        assert_eq!(smootherstep(0.0), 0.0);
        assert_eq!(smootherstep(1.0), 1.0);
        assert!((smootherstep(0.5) - 0.5).abs() < 1e-12);
    }
}
