//! Multi-octave fractal Brownian motion source for synthetic height fields.
//!
//! Composites octaves of simplex noise, each octave doubling in frequency
//! and shrinking in amplitude, to produce natural-looking elevation data
//! for demos and tests.

use noise::{NoiseFn, Simplex};

use crate::HeightField;

/// Tuning for the fBm source.
#[derive(Clone, Debug)]
pub struct FbmParams {
    /// Seed for deterministic output.
    pub seed: u32,
    /// Number of octaves to composite.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency of the first octave, in cycles per sample.
    pub frequency: f64,
    /// Amplitude of the first octave, in elevation units.
    pub amplitude: f64,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 5,
            lacunarity: 2.0,
            persistence: 0.5,
            frequency: 0.01,
            amplitude: 40.0,
        }
    }
}

/// Deterministic fBm elevation source.
pub struct FbmHeightSource {
    noise: Simplex,
    params: FbmParams,
}

impl FbmHeightSource {
    /// Create a source with the given parameters.
    pub fn new(params: FbmParams) -> Self {
        let noise = Simplex::new(params.seed);
        Self { noise, params }
    }

    /// Elevation at a sample coordinate.
    pub fn sample(&self, x: f64, z: f64) -> f32 {
        let mut total = 0.0;
        let mut frequency = self.params.frequency;
        let mut amplitude = self.params.amplitude;

        for _ in 0..self.params.octaves {
            total += self.noise.get([x * frequency, z * frequency]) * amplitude;
            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        total as f32
    }

    /// Sum of all octave amplitudes; bounds the absolute elevation.
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = self.params.amplitude;
        for _ in 0..self.params.octaves {
            sum += amp;
            amp *= self.params.persistence;
        }
        sum
    }

    /// Evaluate the source over a full `(size + 1)^2` grid.
    pub fn generate(&self, size: u32) -> HeightField {
        HeightField::from_fn(size, |x, z| self.sample(f64::from(x), f64::from(z)))
    }
}
