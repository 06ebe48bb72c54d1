//! Little-endian codec between byte strings and 32-bit digit vectors

use byteorder::{ByteOrder, LittleEndian};

/// Decode `N` little-endian 32-bit digits from exactly `4 * N` bytes
///
/// # Panics
///
/// Panics if `bytes.len() != 4 * N`; callers validate lengths first.
#[inline]
pub fn digits_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut digits = [0u32; N];
    LittleEndian::read_u32_into(bytes, &mut digits);
    digits
}

/// Encode 32-bit digits into `out` as little-endian bytes
///
/// # Panics
///
/// Panics if `out.len() != 4 * digits.len()`.
#[inline]
pub fn digits_to_le_bytes(digits: &[u32], out: &mut [u8]) {
    LittleEndian::write_u32_into(digits, out);
}
