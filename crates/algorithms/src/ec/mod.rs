//! Elliptic Curve Primitives
//!
//! This module provides x-coordinate-only arithmetic on Curve25519 and the
//! X25519 key agreement built on it.

pub mod curve25519;

// Re-export types with consistent naming scheme
pub use curve25519::{Curve25519Message, FieldElement as F25519FieldElement};
