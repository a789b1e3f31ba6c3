//! Deterministic random number generation for dealing.
//!
//! The seed feeds `ChaCha8Rng::seed_from_u64` directly, so a seed names the
//! same shuffle on every platform and toolchain.
//!
//! ```
//! use war_sim::core::GameRng;
//!
//! let mut x: Vec<u32> = (0..10).collect();
//! let mut y = x.clone();
//! GameRng::new(7).shuffle(&mut x);
//! GameRng::new(7).shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
