//! Injectable randomness for gateway selection.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random source used by the all-minimum selection branch.
pub trait RandomSource: Send + Sync {
    /// Return a uniformly-distributed index in `0..len`.
    ///
    /// Callers guarantee `len` is nonzero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Draws from the thread-local RNG. The default wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded RNG for reproducible selection in tests.
#[derive(Debug)]
pub struct SeededRngSource {
    rng: Mutex<StdRng>,
}

impl SeededRngSource {
    /// Create a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRngSource {
    fn pick_index(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}
