//! Seeded random source for reproducible star generation.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic uniform random source for star generation.
///
/// The same seed and the same number of draws in the same order
/// reproduce a bit-identical sequence; the star map's byte-for-byte
/// reproducibility rests on this. No other generator state is exposed.
pub struct SkyRng {
    inner: ChaCha8Rng,
}

impl SkyRng {
    /// Create a generator from an integer seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next uniform value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        self.inner.random()
    }
}
