//! Deterministic generation RNG.
//!
//! A 64-bit linear congruential generator. Every random decision made while
//! generating a city draws from one `CityRng`, so identical seeds produce
//! identical cities as long as the draw order is unchanged.
//!
//! `CityRng` implements `rand::RngCore`, so generation code samples through
//! the usual `rand::Rng` / `SliceRandom` helpers (`gen_range`, `shuffle`,
//! `choose`) instead of hand-rolled arithmetic.

use rand::{Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Knuth's MMIX multiplier and increment.
const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Deterministic RNG owned by a single generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRng {
    state: u64,
}

impl CityRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the LCG and return the high 32 bits of the new state.
    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        (self.state >> 32) as u32
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.step() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Current internal state. Runs that made the same draws from the same
    /// seed share it.
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RngCore for CityRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.step() as u64;
        let lo = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.step().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for CityRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Generate a seed from the current system time. Used when no seed is given,
/// which gives up reproducibility.
pub fn random_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = CityRng::new(12345);
        let mut b = CityRng::new(12345);
        let vals_a: Vec<f64> = (0..50).map(|_| a.next_f64()).collect();
        let vals_b: Vec<f64> = (0..50).map(|_| b.next_f64()).collect();
        assert_eq!(vals_a, vals_b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = CityRng::new(1);
        let mut b = CityRng::new(2);
        let vals_a: Vec<u32> = (0..10).map(|_| a.next_u32()).collect();
        let vals_b: Vec<u32> = (0..10).map(|_| b.next_u32()).collect();
        assert_ne!(vals_a, vals_b);
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut rng = CityRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_seed_from_u64_matches_new() {
        let mut a = CityRng::seed_from_u64(99);
        let mut b = CityRng::new(99);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_gen_range_deterministic() {
        let mut a = CityRng::new(42);
        let mut b = CityRng::new(42);
        let vals_a: Vec<u32> = (0..20).map(|_| a.gen_range(0..1000)).collect();
        let vals_b: Vec<u32> = (0..20).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(vals_a, vals_b);
        assert!(vals_a.iter().all(|&v| v < 1000));
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a = CityRng::new(3);
        let mut b = CityRng::new(3);
        let mut xs: Vec<u32> = (0..32).collect();
        let mut ys = xs.clone();
        xs.shuffle(&mut a);
        ys.shuffle(&mut b);
        assert_eq!(xs, ys);
        let mut sorted = xs.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_state_advances_per_step() {
        let mut a = CityRng::new(11);
        assert_eq!(a.state(), 11);
        a.next_u32();
        assert_ne!(a.state(), 11);
        a.next_u32();
        // A u64 draw takes two steps.
        let mut b = CityRng::new(11);
        b.next_u64();
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = CityRng::new(5);
        let mut buf = [0u8; 7];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}
