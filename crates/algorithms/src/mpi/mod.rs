//! Fixed-width multiprecision unsigned integers
//!
//! This is not a general big-integer library: every value is exactly
//! [`DIGITS`] 32-bit digits wide (256 bits), products are exactly twice that,
//! and nothing allocates. There are no signed values, so subtraction reports a
//! borrow instead of producing a negative number; the prime-field layer on top
//! interprets carries and borrows itself.
//!
//! None of these operations can fail.

use core::cmp::Ordering;
use zeroize::Zeroize;

/// Number of 32-bit digits in a [`UInt`]
pub const DIGITS: usize = 8;

/// Number of 32-bit digits in a [`ULong`]
pub const WIDE_DIGITS: usize = 2 * DIGITS;

/// Borrow value reported by [`UInt::sub`] on underflow
pub const BORROW: u32 = 0xFFFF_FFFF;

/// A 256-bit unsigned integer stored as little-endian 32-bit digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct UInt(pub [u32; DIGITS]);

/// A 512-bit unsigned integer: the exact product of two [`UInt`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct ULong(pub [u32; WIDE_DIGITS]);

impl UInt {
    /// The value 0
    pub const ZERO: Self = UInt([0u32; DIGITS]);

    /// The value 2²⁵⁶ − 1
    pub const MAX: Self = UInt([0xFFFF_FFFF; DIGITS]);

    /// Zero-extend a single 32-bit word
    #[inline]
    pub const fn from_small(value: u32) -> Self {
        let mut digits = [0u32; DIGITS];
        digits[0] = value;
        UInt(digits)
    }

    /// Little-endian digits of this value
    #[inline]
    pub fn digits(&self) -> &[u32; DIGITS] {
        &self.0
    }

    /// `self + other`, returning the sum mod 2²⁵⁶ and the carry out of the
    /// top digit (0 or 1).
    pub fn add(&self, other: &Self) -> (Self, u32) {
        let mut r = [0u32; DIGITS];
        let mut carry = 0u64;
        for ((&a, &b), r_digit) in self.0.iter().zip(other.0.iter()).zip(r.iter_mut()) {
            let tmp = (a as u64) + (b as u64) + carry;
            *r_digit = tmp as u32;
            carry = tmp >> 32;
        }
        (UInt(r), carry as u32)
    }

    /// `self - other`, returning the difference mod 2²⁵⁶ and the borrow out
    /// of the top digit: 0, or [`BORROW`] if `other > self`.
    pub fn sub(&self, other: &Self) -> (Self, u32) {
        let mut r = [0u32; DIGITS];
        let mut borrow = 0u64;
        for ((&a, &b), r_digit) in self.0.iter().zip(other.0.iter()).zip(r.iter_mut()) {
            // b + borrow <= 2^32, so a negative result sets bit 63
            let tmp = (a as u64).wrapping_sub((b as u64) + borrow);
            *r_digit = tmp as u32;
            borrow = tmp >> 63;
        }
        (UInt(r), 0u32.wrapping_sub(borrow as u32))
    }

    /// Compare most-significant digit first.
    ///
    /// **Not constant-time**: returns as soon as a differing digit is found.
    pub fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            if a < b {
                return Ordering::Less;
            }
            if a > b {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    /// Full 256 × 256 → 512-bit schoolbook product.
    ///
    /// No carry is ever dropped: when row `i` is accumulated, digit
    /// `i + DIGITS` of the result is still zero, and the largest possible
    /// row sum `(2³² − 1) · (2²⁵⁶ − 1)` added to at most `2²⁵⁶ − 1` below it
    /// fits in `DIGITS + 1` digits.
    pub fn mul_wide(&self, other: &Self) -> ULong {
        let mut res = [0u32; WIDE_DIGITS];
        for (i, &a) in self.0.iter().enumerate() {
            let carry = mul_row(&mut res[i..=i + DIGITS], a, &other.0);
            debug_assert_eq!(carry, 0);
        }
        ULong(res)
    }
}

impl PartialOrd for UInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl From<u32> for UInt {
    fn from(value: u32) -> Self {
        UInt::from_small(value)
    }
}

impl ULong {
    /// The value 0
    pub const ZERO: Self = ULong([0u32; WIDE_DIGITS]);

    /// Low 256 bits
    pub fn low(&self) -> UInt {
        let mut digits = [0u32; DIGITS];
        digits.copy_from_slice(&self.0[..DIGITS]);
        UInt(digits)
    }

    /// High 256 bits
    pub fn high(&self) -> UInt {
        let mut digits = [0u32; DIGITS];
        digits.copy_from_slice(&self.0[DIGITS..]);
        UInt(digits)
    }
}

/// Multiply `row` by the word `k` and add the product into `dst[0..=DIGITS]`.
///
/// Returns the carry out of `dst[DIGITS]`, which belongs in `dst[DIGITS + 1]`.
///
/// # Panics
///
/// Panics if `dst` is shorter than `DIGITS + 1`.
#[inline]
pub(crate) fn mul_row(dst: &mut [u32], k: u32, row: &[u32; DIGITS]) -> u32 {
    let mut carry = 0u64;
    for (d, &r) in dst[..DIGITS].iter_mut().zip(row.iter()) {
        // (2^32-1) + (2^32-1)^2 + (2^32-1) == 2^64 - 1
        let tmp = (*d as u64) + (k as u64) * (r as u64) + carry;
        *d = tmp as u32;
        carry = tmp >> 32;
    }
    let tmp = (dst[DIGITS] as u64) + carry;
    dst[DIGITS] = tmp as u32;
    (tmp >> 32) as u32
}
