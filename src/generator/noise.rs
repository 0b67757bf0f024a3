//! Injectable randomness for the generator.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed values.
pub trait NoiseSource {
    /// Next value drawn uniformly from `[low, high)`.
    ///
    /// Implementations must return `low` when the range is empty.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64;
}

/// Unseeded noise from the thread-local RNG.
pub struct ThreadRngNoise {
    rng: ThreadRng,
}

impl ThreadRngNoise {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRngNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for ThreadRngNoise {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        uniform(&mut self.rng, low, high)
    }
}

/// Reproducible noise: the same seed yields the same sequence.
pub struct SeededNoise {
    rng: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for SeededNoise {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        uniform(&mut self.rng, low, high)
    }
}

/// Pick the noise source a config asks for.
pub fn from_seed(seed: Option<u64>) -> Box<dyn NoiseSource> {
    match seed {
        Some(seed) => Box::new(SeededNoise::new(seed)),
        None => Box::new(ThreadRngNoise::new()),
    }
}

fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    // gen_range panics on an empty range.
    if high <= low {
        return low;
    }
    rng.gen_range(low..high)
}
