//! Stochastic chunk splitting
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("TASKWIRE_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Split input into chunks of 0..=max_len bytes.
    /// Empty chunks are kept; they must be harmless.
    pub fn split<'a>(&mut self, input: &'a [u8], max_len: usize) -> Vec<&'a [u8]> {
        let mut chunks = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            let len = self.rng.gen_range(0..=max_len).min(input.len() - pos);
            chunks.push(&input[pos..pos + len]);
            pos += len;
            if self.chance(0.1) {
                chunks.push(&input[pos..pos]);
            }
        }
        chunks
    }
}
