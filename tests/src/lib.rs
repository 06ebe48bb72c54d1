//! Known-answer vectors and shared helpers for the ucrypt test suites

pub mod vectors;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic generator for reproducible test runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Decode a 64-character hex string into 32 bytes.
///
/// Panics on malformed input; vectors are compile-time constants.
pub fn decode32(hex_str: &str) -> [u8; 32] {
    let bytes = hex::decode(hex_str).expect("vector is valid hex");
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    out
}
