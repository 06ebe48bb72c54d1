//! # ucrypt
//!
//! A small cryptographic primitives library built around Curve25519 scalar
//! multiplication.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ucrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `constant-time-reduce`: masked final reduction for field arithmetic
//! - `rand`: re-export `rand` for callers that want a ready-made random source
//! - `full`: all of the above except `constant-time-reduce`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ucrypt-api`]: public error type, secret containers, random-source trait
//! - [`ucrypt-internal`]: constant-time selection and digit encoding helpers
//! - [`ucrypt-algorithms`]: fixed-width integers, F25519, the Montgomery
//!   ladder and X25519

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use ucrypt_algorithms as algorithms;
pub use ucrypt_api as api;
pub use ucrypt_internal as internal;

#[cfg(feature = "rand")]
pub use rand;

/// Common imports for ucrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits and security types
    pub use crate::api::{RandomSource, SecretBytes};

    // Curve25519
    pub use crate::algorithms::ec::curve25519::{
        curve25519,
        x25519::{generate_keypair, PublicKey, SecretKey, SharedSecret, BASE_POINT},
        Curve25519Message, FieldElement,
    };

    // Re-export zeroize for secure memory handling
    pub use zeroize::{Zeroize, ZeroizeOnDrop};
}
