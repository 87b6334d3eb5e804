//! Random sources for row shuffling — ambient or seeded SplitMix64.
//!
//! Two grids generated with the same settings and the same seed must come
//! out in the same row order, so the seeded variant has to produce an
//! identical draw sequence across runs and processes. SplitMix64 does this
//! with a single u64 state word and strong mixing. The ambient variant
//! wraps the thread-local generator from `rand` and makes no
//! reproducibility promise.

use rand::rngs::ThreadRng;
use rand::Rng;

/// A stream of uniform draws in `[0, 1)`.
///
/// One source lives for exactly one grid-generation call; there is no
/// reseeding mid-sequence.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// SplitMix64 PRNG — single u64 state, excellent statistical quality.
#[derive(Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create from seed.
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMix64 {
    /// Uniform f64 in [0, 1) from the top 53 bits of the next u64.
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Non-reproducible source backed by the host's thread-local generator.
pub struct AmbientSource {
    rng: ThreadRng,
}

impl AmbientSource {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for AmbientSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for AmbientSource {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
