//! Fractal noise-map generation.
//!
//! Layers several octaves of a coherent-noise primitive over a 2D grid,
//! tracks the extrema of the accumulated values and rescales the whole
//! field into the byte range [0, 255].

use noise::NoiseFn;
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

/// Substituted for non-positive `scale` values so the sample-coordinate
/// division stays defined. Produces an extremely high-frequency field.
const SCALE_EPSILON: f64 = 1e-4;

/// Per-octave domain offsets are drawn uniformly from `[-OFFSET_RANGE, OFFSET_RANGE)`.
const OFFSET_RANGE: i32 = 50_000;

/// Every cell collapses to this value when the accumulated field has no
/// range to stretch (zero octaves, or a constant primitive). Midpoint of
/// the output range.
pub const FLAT_HEIGHT: u8 = 127;

/// Parameters for one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseMapConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Sampling zoom factor; higher values give smoother terrain.
    pub scale: f64,
    /// Number of noise layers to combine.
    pub octaves: u32,
    /// Amplitude multiplier applied after each octave.
    pub persistence: f64,
    /// Frequency multiplier applied after each octave.
    pub lacunarity: f64,
    /// Global translation of the sampling domain.
    pub offset: [f64; 2],
}

impl Default for NoiseMapConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            scale: 25.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            offset: [0.0, 0.0],
        }
    }
}

/// A finished height field: `width × height` byte cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseMap {
    pub width: u32,
    pub height: u32,
    /// Cell values in row-major order, index = y * width + x.
    pub values: Vec<u8>,
}

impl NoiseMap {
    /// Returns the height value at (x, y).
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.values[(y * self.width + x) as usize]
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Generates a noise map, drawing one random domain offset per octave from
/// `rng`. Reseeding `rng` identically reproduces the same map for the same
/// primitive and configuration.
pub fn generate<N, R>(config: &NoiseMapConfig, noise: &N, rng: &mut R) -> NoiseMap
where
    N: NoiseFn<f64, 2>,
    R: Rng + ?Sized,
{
    let octave_offsets: Vec<[f64; 2]> = (0..config.octaves)
        .map(|_| {
            [
                rng.random_range(-OFFSET_RANGE..OFFSET_RANGE) as f64 + config.offset[0],
                rng.random_range(-OFFSET_RANGE..OFFSET_RANGE) as f64 + config.offset[1],
            ]
        })
        .collect();

    generate_with_offsets(config, noise, &octave_offsets)
}

/// Generates a noise map from pre-drawn per-octave domain offsets.
///
/// `octave_offsets` holds one entry per octave and already includes any
/// global domain translation; its length is the octave count. The primitive
/// is sampled as an already-centered [-1, 1] function; each sample is
/// weighted by the octave's cumulative amplitude and accumulated, then the
/// grid is rescaled from its observed [min, max] onto [0, 255].
pub fn generate_with_offsets<N>(
    config: &NoiseMapConfig,
    noise: &N,
    octave_offsets: &[[f64; 2]],
) -> NoiseMap
where
    N: NoiseFn<f64, 2>,
{
    let w = config.width as usize;
    let h = config.height as usize;

    // A non-positive zoom would collapse or flip the sampling domain;
    // fall back to a tiny zoom instead of failing.
    let scale = if config.scale <= 0.0 {
        SCALE_EPSILON
    } else {
        config.scale
    };

    let half_width = config.width as f64 / 2.0;
    let half_height = config.height as f64 / 2.0;

    let mut raw = vec![0.0f64; w * h];
    let mut min_height = f64::MAX;
    let mut max_height = f64::MIN;

    // First pass: accumulate the weighted octave samples per cell and track
    // the extrema of the accumulated values across the whole grid.
    for y in 0..h {
        for x in 0..w {
            let mut amplitude = 1.0;
            let mut frequency = 1.0;
            let mut noise_height = 0.0;

            for offset in octave_offsets {
                let sample_x = (x as f64 - half_width) / scale * frequency + offset[0];
                let sample_y = (y as f64 - half_height) / scale * frequency + offset[1];

                noise_height += noise.get([sample_x, sample_y]) * amplitude;

                amplitude *= config.persistence;
                frequency *= config.lacunarity;
            }

            min_height = min_height.min(noise_height);
            max_height = max_height.max(noise_height);
            raw[y * w + x] = noise_height;
        }
    }

    // Second pass: rescale the observed range onto the byte range. A flat
    // field has no range to stretch; every cell collapses to the midpoint.
    let values = if max_height > min_height {
        let span = max_height - min_height;
        raw.iter()
            .map(|&v| ((v - min_height) / span * 255.0).floor() as u8)
            .collect()
    } else {
        vec![FLAT_HEIGHT; w * h]
    };

    NoiseMap {
        width: config.width,
        height: config.height,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise::Perlin;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    /// Primitive that returns the same value for every coordinate.
    struct Constant(f64);

    impl NoiseFn<f64, 2> for Constant {
        fn get(&self, _point: [f64; 2]) -> f64 {
            self.0
        }
    }

    /// Primitive that counts how often it is sampled.
    struct Counting(Cell<u32>);

    impl NoiseFn<f64, 2> for Counting {
        fn get(&self, _point: [f64; 2]) -> f64 {
            self.0.set(self.0.get() + 1);
            0.0
        }
    }

    /// Primitive whose value is the sum of its coordinates, so expected
    /// outputs can be computed by hand near the origin.
    struct Gradient;

    impl NoiseFn<f64, 2> for Gradient {
        fn get(&self, point: [f64; 2]) -> f64 {
            point[0] + point[1]
        }
    }

    fn config(width: u32, height: u32) -> NoiseMapConfig {
        NoiseMapConfig {
            width,
            height,
            ..NoiseMapConfig::default()
        }
    }

    #[test]
    fn map_has_width_times_height_cells() {
        let mut rng = StdRng::seed_from_u64(1);
        let map = generate(&config(13, 7), &Perlin::new(1), &mut rng);

        assert_eq!(map.width, 13);
        assert_eq!(map.height, 7);
        assert_eq!(map.len(), 13 * 7);
    }

    #[test]
    fn same_seed_reproduces_the_same_map() {
        let cfg = config(32, 32);
        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);

        let first = generate(&cfg, &Perlin::new(99), &mut first_rng);
        let second = generate(&cfg, &Perlin::new(99), &mut second_rng);

        assert_eq!(first.values, second.values);
    }

    #[test]
    fn zero_octaves_collapses_to_the_flat_midpoint() {
        let cfg = NoiseMapConfig {
            octaves: 0,
            ..config(8, 8)
        };
        let mut rng = StdRng::seed_from_u64(2);
        let map = generate(&cfg, &Perlin::new(2), &mut rng);

        assert_eq!(map.len(), 64);
        assert!(map.values.iter().all(|&v| v == FLAT_HEIGHT));
    }

    #[test]
    fn constant_primitive_yields_a_flat_map() {
        let mut rng = StdRng::seed_from_u64(3);
        let map = generate(&config(10, 10), &Constant(0.5), &mut rng);

        assert!(map.values.iter().all(|&v| v == FLAT_HEIGHT));
    }

    #[test]
    fn non_positive_scale_still_generates() {
        for scale in [0.0, -3.0] {
            let cfg = NoiseMapConfig {
                scale,
                ..config(8, 8)
            };
            let mut rng = StdRng::seed_from_u64(4);
            let map = generate(&cfg, &Perlin::new(4), &mut rng);
            assert_eq!(map.len(), 64);
        }
    }

    #[test]
    fn extreme_falloff_parameters_are_accepted() {
        // persistence > 1 and lacunarity < 1 are passed through as given.
        let cfg = NoiseMapConfig {
            persistence: 3.0,
            lacunarity: 0.25,
            ..config(16, 16)
        };
        let mut rng = StdRng::seed_from_u64(5);
        let map = generate(&cfg, &Perlin::new(5), &mut rng);

        assert_eq!(map.len(), 256);
    }

    #[test]
    fn empty_grid_never_samples_the_primitive() {
        let noise = Counting(Cell::new(0));
        let mut rng = StdRng::seed_from_u64(6);

        assert!(generate(&config(0, 17), &noise, &mut rng).is_empty());
        assert!(generate(&config(17, 0), &noise, &mut rng).is_empty());
        assert_eq!(noise.0.get(), 0);
    }

    #[test]
    fn single_octave_output_is_a_monotonic_rescale() {
        let cfg = NoiseMapConfig {
            octaves: 1,
            ..config(16, 1)
        };
        let map = generate_with_offsets(&cfg, &Gradient, &[[0.0, 0.0]]);

        assert!(map.values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(map.get(0, 0), 0);
        assert_eq!(map.get(15, 0), 255);
    }

    #[test]
    fn two_by_two_gradient_matches_hand_computed_values() {
        let cfg = NoiseMapConfig {
            width: 2,
            height: 2,
            scale: 25.0,
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
            offset: [0.0, 0.0],
        };
        let map = generate_with_offsets(&cfg, &Gradient, &[[0.0, 0.0]]);

        // Raw samples are (x - 1)/25 + (y - 1)/25 for x, y in {0, 1}:
        // -0.08, -0.04, -0.04, 0.0. Rescaled onto [0, 255] and floored.
        assert_eq!(map.get(0, 0), 0);
        assert_eq!(map.get(1, 0), 127);
        assert_eq!(map.get(0, 1), 127);
        assert_eq!(map.get(1, 1), 255);
    }
}
