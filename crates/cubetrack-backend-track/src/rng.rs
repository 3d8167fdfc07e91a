//! Deterministic RNG wrapper using PCG32.
//!
//! All track generation goes through this module so a fixed seed always
//! yields the same cube sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Create a new RNG from a signed track seed. Negative seeds keep their
    /// bit pattern.
    pub fn from_track_seed(seed: i32) -> Self {
        Self::new(seed as u32)
    }

    /// Restart the stream from `seed`, discarding the current state.
    pub fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random f64 in the range (0.0, 1.0].
    #[inline]
    pub fn gen_unit_draw(&mut self) -> f64 {
        1.0 - self.gen_f64()
    }

    /// Bernoulli roll: succeeds when a draw in (0, 1] is `<= chance`.
    ///
    /// A draw equal to the threshold succeeds. `chance <= 0` never
    /// succeeds, `chance >= 1` always does.
    #[inline]
    pub fn chance(&mut self, chance: f32) -> bool {
        self.gen_unit_draw() <= chance as f64
    }

    /// Pick one element uniformly.
    ///
    /// # Panics
    /// Panics if `items` is empty.
    #[inline]
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.inner.gen_range(0..items.len())]
    }
}
