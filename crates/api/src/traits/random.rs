//! Random-byte source interface.
//!
//! Key generation is the only consumer of randomness in ucrypt; the
//! arithmetic core never reads from a random source.

use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// A source of cryptographically secure random bytes.
///
/// Implementations must either fill the whole buffer or fail; a partially
/// filled buffer must never be reported as success.
pub trait RandomSource {
    /// Fill `buffer` completely with random bytes.
    fn fill_random(&mut self, buffer: &mut [u8]) -> Result<()>;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn fill_random(&mut self, buffer: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(buffer)
            .map_err(|_| Error::RandomGenerationError {
                context: "RandomSource::fill_random",
            })
    }
}
