//! Deterministic random number generation for the offline deck.
//!
//! Same seed, same shuffles and same deck ids:
//!
//! ```
//! use deck_war::core::DeckRng;
//!
//! let mut a = DeckRng::new(42);
//! let mut b = DeckRng::new(42);
//!
//! let mut xs = [1, 2, 3, 4, 5];
//! let mut ys = [1, 2, 3, 4, 5];
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Seeded ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Random lowercase alphanumeric identifier of length `len`.
    pub fn gen_id(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| ID_ALPHABET[self.inner.gen_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }
}
