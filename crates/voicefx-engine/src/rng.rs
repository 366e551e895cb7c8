//! Random sources for impulse-response synthesis.
//!
//! The impulse generator is the only stochastic part of the engine. It draws
//! through the [`RandomSource`] trait so production renders can use the
//! process-wide thread-local generator while tests inject a seeded PCG32
//! stream and assert exact kernel values.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A stream of uniformly distributed samples in [-1.0, 1.0).
pub trait RandomSource {
    /// Draws the next bipolar sample.
    fn next_bipolar(&mut self) -> f32;
}

/// Production source backed by the process-wide thread-local generator.
///
/// Safe for concurrent renders: each thread draws from its own generator,
/// and no ordering across renders is required or implied.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_bipolar(&mut self) -> f32 {
        rand::thread_rng().gen_range(-1.0..1.0)
    }
}

/// Deterministic source backed by PCG32, for tests.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    /// Creates a seeded source.
    ///
    /// The 32-bit seed is expanded to 64 bits by duplicating the value in
    /// both halves, as required by PCG32's state initialization.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            rng: Pcg32::seed_from_u64(seed64),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_bipolar(&mut self) -> f32 {
        self.rng.gen_range(-1.0..1.0)
    }
}
