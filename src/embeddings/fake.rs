//! Deterministic hash-seeded vectors for offline and test runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::config::FAKE_DIMENSION;

/// Embeds each text as [`FAKE_DIMENSION`] uniform floats in `[0, 1)` drawn
/// from an RNG seeded by the text's SHA-256 digest.
///
/// Identical text always maps to an identical vector regardless of position
/// or call order; different texts get independent-looking but reproducible
/// vectors. No network or model dependency.
pub fn embed(texts: &[String]) -> Vec<Vec<f64>> {
    texts.iter().map(|text| vector_for(text)).collect()
}

fn vector_for(text: &str) -> Vec<f64> {
    let digest = Sha256::digest(text.as_bytes());
    // First 16 hex digits of the digest, interpreted as a 64-bit seed.
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    let mut rng = StdRng::seed_from_u64(u64::from_be_bytes(seed_bytes));
    (0..FAKE_DIMENSION).map(|_| rng.random::<f64>()).collect()
}
