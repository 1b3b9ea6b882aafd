//! Random filler text for load-testing a paste server.
//!
//! **Not cryptographic.** The generator is seedable so runs can be replayed.
//! It only produces paste *content*; key, salt and IV material always come
//! from [`crate::random::OsEntropy`].

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Newlines appear five times in the alphabet so filler text has lines.
const ALPHABET: &[u8] = b"\n\n\n\n\nabcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Explicitly owned filler-text generator.
#[derive(Debug, Clone)]
pub struct FillerGenerator<R = StdRng> {
    rng: R,
}

impl FillerGenerator<StdRng> {
    /// Reproducible generator: the same seed yields the same text.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FillerGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `size` characters of filler text.
    pub fn generate(&mut self, size: usize) -> String {
        (0..size)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
