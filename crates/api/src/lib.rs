//! Public API traits and types for the ucrypt library
//!
//! This crate provides the public API surface for the ucrypt ecosystem: the
//! error type shared by every member crate, validation helpers, secret byte
//! containers and the interface of the random-byte source.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::RandomSource;
pub use types::SecretBytes;
