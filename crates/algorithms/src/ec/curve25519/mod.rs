//! Curve25519 Elliptic Curve Primitives
//!
//! x-coordinate-only scalar multiplication on the Montgomery curve
//! v² = u³ + 486662·u² + u over 𝔽ₚ, where
//! - p = 2²⁵⁵ − 19,
//! - the base point has u = 9.
//!
//! Implements:
//! - 𝔽ₚ arithmetic on 8 × 32-bit digits with a fold-by-19 reduction,
//! - a Montgomery ladder over projective (X:Z) coordinates,
//! - a fixed addition chain for the final inversion,
//! - X25519 key agreement on top of [`curve25519`].
//!
//! Scalar bits 255, 254 and 2..0 are fixed by the ladder (254 set, the rest
//! clear), so callers never clamp. The base point is range checked on decode
//! but not otherwise validated.

mod constants;
mod field;
mod ladder;
pub mod x25519;

pub use constants::{CURVE25519_MESSAGE_SIZE, F25519_FIELD_ELEMENT_SIZE};
pub use field::FieldElement;

use crate::error::{validate, Result};
use zeroize::Zeroize;

/// 32-byte little-endian encoding of a scalar or an affine x-coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Curve25519Message([u8; CURVE25519_MESSAGE_SIZE]);

impl Curve25519Message {
    /// Wrap raw message bytes
    pub const fn new(bytes: [u8; CURVE25519_MESSAGE_SIZE]) -> Self {
        Curve25519Message(bytes)
    }

    /// Create a message from a slice of exactly [`CURVE25519_MESSAGE_SIZE`] bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("Curve25519 message", bytes.len(), CURVE25519_MESSAGE_SIZE)?;
        let mut out = [0u8; CURVE25519_MESSAGE_SIZE];
        out.copy_from_slice(bytes);
        Ok(Curve25519Message(out))
    }

    /// Borrow the encoded bytes
    pub fn as_bytes(&self) -> &[u8; CURVE25519_MESSAGE_SIZE] {
        &self.0
    }

    /// Consume the message and return its bytes
    pub fn into_bytes(self) -> [u8; CURVE25519_MESSAGE_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for Curve25519Message {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; CURVE25519_MESSAGE_SIZE]> for Curve25519Message {
    fn from(bytes: [u8; CURVE25519_MESSAGE_SIZE]) -> Self {
        Curve25519Message(bytes)
    }
}

impl From<FieldElement> for Curve25519Message {
    fn from(fe: FieldElement) -> Self {
        Curve25519Message(fe.to_bytes())
    }
}

/// Scalar multiplication: x-coordinate of `scalar`·P, where P has
/// x-coordinate `basepoint`.
///
/// Fails only when `basepoint` encodes a value ≥ p. The scalar is taken as
/// is. A degenerate result (point at infinity) encodes as zero.
pub fn curve25519(
    scalar: &Curve25519Message,
    basepoint: &Curve25519Message,
) -> Result<Curve25519Message> {
    scalar_mult_bytes(scalar.as_bytes(), basepoint.as_bytes()).map(Curve25519Message)
}

/// Byte-level form of [`curve25519`] shared with the key-agreement types
pub(crate) fn scalar_mult_bytes(
    scalar: &[u8; CURVE25519_MESSAGE_SIZE],
    basepoint: &[u8; CURVE25519_MESSAGE_SIZE],
) -> Result<[u8; CURVE25519_MESSAGE_SIZE]> {
    let qmqp = FieldElement::from_bytes(basepoint)?;
    let mut x = ladder::scalar_mult(scalar, &qmqp);
    let out = x.to_bytes();
    x.zeroize();
    Ok(out)
}
