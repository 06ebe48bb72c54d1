//! Validation utilities for cryptographic primitives

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a decoded value lies inside its permitted range
#[inline(always)]
pub fn range(in_range: bool, context: &'static str) -> Result<()> {
    if !in_range {
        return Err(Error::OutOfRange { context });
    }
    Ok(())
}
