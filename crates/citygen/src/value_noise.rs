//! Seeded 2D value noise with fBm summation.
//!
//! The lattice seed is drawn from the generation RNG, so the field is as
//! reproducible as the rest of the run. Value noise with hermite
//! (smoothstep) interpolation between lattice values; the fractal variant sums
//! `octaves` layers with the configured persistence.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use rand::Rng;

use crate::city_rng::CityRng;
use crate::params::NoiseParams;

/// Largest value returned by the sampling functions; the field lives in `[0, 1)`.
const MAX_SAMPLE: f32 = 1.0 - f32::EPSILON;

pub struct ValueNoise {
    seed: i32,
    single: FastNoiseLite,
    fractal: FastNoiseLite,
}

impl ValueNoise {
    pub fn new(seed: i32, params: &NoiseParams) -> Self {
        let mut single = FastNoiseLite::with_seed(seed);
        single.set_noise_type(Some(NoiseType::Value));
        single.set_frequency(Some(1.0));
        single.set_fractal_type(Some(FractalType::None));

        let mut fractal = FastNoiseLite::with_seed(seed);
        fractal.set_noise_type(Some(NoiseType::Value));
        fractal.set_frequency(Some(1.0));
        fractal.set_fractal_type(Some(FractalType::FBm));
        fractal.set_fractal_octaves(Some(params.octaves.max(1)));
        fractal.set_fractal_gain(Some(params.persistence));
        fractal.set_fractal_lacunarity(Some(params.lacunarity));

        Self {
            seed,
            single,
            fractal,
        }
    }

    /// Draw the lattice seed from `rng` and build the field.
    pub fn from_rng(rng: &mut CityRng, params: &NoiseParams) -> Self {
        let seed: i32 = rng.gen();
        Self::new(seed, params)
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Single-octave value noise in `[0, 1)`.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        normalize(self.single.get_noise_2d(x, y))
    }

    /// Fractal (fBm) value noise in `[0, 1)`.
    pub fn fbm(&self, x: f32, y: f32) -> f32 {
        normalize(self.fractal.get_noise_2d(x, y))
    }
}

/// Value noise outputs in [-1, 1]; map to [0, 1).
fn normalize(raw: f32) -> f32 {
    ((raw + 1.0) * 0.5).clamp(0.0, MAX_SAMPLE)
}
