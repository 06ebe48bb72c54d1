//! X25519 Diffie-Hellman key agreement

use super::constants::CURVE25519_MESSAGE_SIZE;
use super::{scalar_mult_bytes, Curve25519Message};
use crate::error::Result;
use ucrypt_api::{RandomSource, ResultExt, SecretBytes};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The standard base point, u = 9
pub const BASE_POINT: Curve25519Message = Curve25519Message::new({
    let mut bytes = [0u8; CURVE25519_MESSAGE_SIZE];
    bytes[0] = 9;
    bytes
});

/// An X25519 secret scalar. Wiped on drop; `Debug` does not print it.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(SecretBytes<CURVE25519_MESSAGE_SIZE>);

/// An X25519 public key: the x-coordinate of secret·B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; CURVE25519_MESSAGE_SIZE]);

/// The output of a key agreement. Wiped on drop.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(SecretBytes<CURVE25519_MESSAGE_SIZE>);

impl SecretKey {
    /// Draw a fresh secret key from `rng`.
    ///
    /// All 32 bytes are used as drawn; the ladder ignores the bits that
    /// clamping would otherwise fix.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self> {
        let bytes = SecretBytes::random(rng).with_context("x25519::SecretKey::generate")?;
        Ok(SecretKey(bytes))
    }

    /// Wrap existing key bytes
    pub fn from_bytes(bytes: [u8; CURVE25519_MESSAGE_SIZE]) -> Self {
        SecretKey(SecretBytes::new(bytes))
    }

    /// Create a key from a slice of exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(SecretKey(SecretBytes::from_slice(bytes)?))
    }

    /// Borrow the raw scalar bytes
    pub fn as_bytes(&self) -> &[u8; CURVE25519_MESSAGE_SIZE] {
        &self.0
    }

    /// The matching public key, secret·B
    pub fn public_key(&self) -> Result<PublicKey> {
        scalar_mult_bytes(&self.0, BASE_POINT.as_bytes()).map(PublicKey)
    }

    /// Agree on a shared secret with `peer`.
    ///
    /// A peer key encoding a value ≥ p is rejected. An all-zero shared
    /// secret (small-order peer key) is returned as is.
    pub fn diffie_hellman(&self, peer: &PublicKey) -> Result<SharedSecret> {
        let shared = scalar_mult_bytes(&self.0, &peer.0)?;
        Ok(SharedSecret(SecretBytes::new(shared)))
    }
}

impl PublicKey {
    /// Wrap existing key bytes
    pub const fn from_bytes(bytes: [u8; CURVE25519_MESSAGE_SIZE]) -> Self {
        PublicKey(bytes)
    }

    /// Create a key from a slice of exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Curve25519Message::from_slice(bytes).map(|m| PublicKey(m.into_bytes()))
    }

    /// Borrow the encoded x-coordinate
    pub fn as_bytes(&self) -> &[u8; CURVE25519_MESSAGE_SIZE] {
        &self.0
    }
}

impl From<PublicKey> for Curve25519Message {
    fn from(pk: PublicKey) -> Self {
        Curve25519Message::new(pk.0)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl SharedSecret {
    /// Borrow the shared secret bytes
    pub fn as_bytes(&self) -> &[u8; CURVE25519_MESSAGE_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

/// Generate a secret key and its public key
pub fn generate_keypair<R: RandomSource + ?Sized>(rng: &mut R) -> Result<(SecretKey, PublicKey)> {
    let sk = SecretKey::generate(rng)?;
    let pk = sk.public_key()?;
    Ok((sk, pk))
}
