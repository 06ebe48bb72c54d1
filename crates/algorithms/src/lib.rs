//! Cryptographic primitives for the ucrypt library
//!
//! The crate is layered, leaves first:
//!
//! - [`mpi`]: fixed-width 256-bit unsigned integers with explicit carries
//!   and a widening multiply,
//! - [`ec::curve25519`]: arithmetic modulo 2²⁵⁵ − 19 on top of [`mpi`], the
//!   Montgomery ladder, and X25519 key agreement.
//!
//! Nothing allocates, and no state survives between calls. The library is
//! usable in both `std` and `no_std` environments.
//!
//! # Side channels
//!
//! The ladder executes the same sequence of field operations for every
//! scalar. Digit comparison and the final reduction of each field operation
//! are variable-time unless the `constant-time-reduce` feature is enabled.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Fixed-width integers
pub mod mpi;
pub use mpi::{UInt, ULong};

// Elliptic Curve primitives
pub mod ec;
pub use ec::curve25519::{
    curve25519,
    x25519::{self, PublicKey, SecretKey, SharedSecret},
    Curve25519Message, CURVE25519_MESSAGE_SIZE,
};
