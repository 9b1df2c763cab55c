//! Shared helpers for the ffdsa integration test suite

#![forbid(unsafe_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A deterministic RNG so integration runs are reproducible end to end.
pub fn test_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x00dd_c0ff_ee00_0001)
}
