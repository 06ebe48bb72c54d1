//! Shared constants for Curve25519 operations

use crate::mpi::UInt;

/// Size of a Curve25519 message (scalar or x-coordinate) in bytes
pub const CURVE25519_MESSAGE_SIZE: usize = 32;

/// Size of an encoded F25519 field element in bytes
pub const F25519_FIELD_ELEMENT_SIZE: usize = 32;

/// p = 2²⁵⁵ − 19, little-endian 32-bit digits
pub(crate) const P25519: UInt = UInt([
    0xFFFF_FFED, // least significant
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0x7FFF_FFFF, // most significant
]);

/// (A − 2) / 4 for the Montgomery coefficient A = 486662
pub(crate) const A24: u32 = 486662 / 4;

/// Highest scalar bit read by the ladder; bit 254 is implicitly one
pub(crate) const LADDER_TOP_BIT: usize = 253;

/// Lowest scalar bit read by the ladder; bits 2..0 are processed as zero
pub(crate) const LADDER_BOTTOM_BIT: usize = 3;
