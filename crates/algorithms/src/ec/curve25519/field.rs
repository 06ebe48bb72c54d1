//! F25519 field arithmetic implementation

use crate::ec::curve25519::constants::{F25519_FIELD_ELEMENT_SIZE, P25519};
use crate::error::{validate, Result};
use crate::mpi::{mul_row, UInt, ULong, DIGITS};
use core::cmp::Ordering;
use ucrypt_internal::endian::{digits_from_le_bytes, digits_to_le_bytes};
use zeroize::Zeroize;

/// F25519 field element representing values in 𝔽ₚ, where
/// p = 2²⁵⁵ − 19.
///
/// Internally stored as a [`UInt`] (8 little-endian 32-bit digits). Every
/// value handed out by a public method is canonical, i.e. < p.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct FieldElement(pub(crate) UInt);

impl FieldElement {
    /* ================================================================= */
    /*  Tiny helpers                                                     */
    /* ================================================================= */

    /// Build a field element from a small literal (`0 ≤ n < 2³²`)
    #[inline]
    pub const fn from_u32(n: u32) -> Self {
        FieldElement(UInt::from_small(n))
    }

    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Self {
        FieldElement(UInt::ZERO)
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Self {
        FieldElement::from_u32(1)
    }

    /// Create a field element from little-endian bytes.
    ///
    /// Values ≥ p are rejected, never reduced.
    pub fn from_bytes(bytes: &[u8; F25519_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let value = UInt(digits_from_le_bytes::<DIGITS>(bytes));
        validate::range(value < P25519, "F25519 field element")?;
        Ok(FieldElement(value))
    }

    /// Create a field element from a little-endian byte slice of exactly
    /// [`F25519_FIELD_ELEMENT_SIZE`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("F25519 field element", bytes.len(), F25519_FIELD_ELEMENT_SIZE)?;
        let mut buf = [0u8; F25519_FIELD_ELEMENT_SIZE];
        buf.copy_from_slice(bytes);
        let fe = Self::from_bytes(&buf);
        buf.zeroize();
        fe
    }

    /// Convert this field element into little-endian bytes.
    pub fn to_bytes(&self) -> [u8; F25519_FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; F25519_FIELD_ELEMENT_SIZE];
        digits_to_le_bytes(self.0.digits(), &mut out);
        out
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        self.0 == UInt::ZERO
    }

    /// The canonical integer value of this element
    pub fn as_uint(&self) -> &UInt {
        &self.0
    }

    /// Addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        // Both inputs < p, so the sum is < 2p < 2²⁵⁶ and never carries
        let (sum, _) = self.0.add(&other.0);
        Self::reduce(sum)
    }

    /// Subtraction: (self − other) mod p, computed as self + (p − other).
    ///
    /// `p − other` is in (0, p], so it is not itself a field element when
    /// `other` is zero; the sum is still < 2p and the final reduction fixes it.
    pub fn sub(&self, other: &Self) -> Self {
        let (neg_other, _) = P25519.sub(&other.0);
        let (sum, _) = self.0.add(&neg_other);
        Self::reduce(sum)
    }

    /// Field multiplication: (self * other) mod p
    pub fn mul(&self, other: &Self) -> Self {
        let wide = self.0.mul_wide(&other.0);
        Self::reduce(Self::reduce_wide_approx(wide))
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplication by a one-digit constant: (self * k) mod p
    pub fn mul_small(&self, k: u32) -> Self {
        self.mul(&FieldElement::from_u32(k))
    }

    /// Multiplicative inverse by Fermat's little theorem, self^(p−2).
    ///
    /// p − 2 = 2²⁵⁵ − 21, whose binary form is fifty `11111` groups followed
    /// by `01011`. The chain first builds z¹¹ (the low group) and z³¹ (one
    /// full group), then appends one group per iteration: five squarings of
    /// the running z^(31·32ᵏ) and a multiply into the result. The sequence of
    /// operations is fixed. Zero maps to zero.
    pub fn invert(&self) -> Self {
        let z = self;
        let mut t = z.square(); // z^2
        t = t.square(); // z^4
        t = t.mul(z); // z^5
        t = t.square(); // z^10
        let mut res = t.mul(z); // z^11
        t = t.square(); // z^20
        t = t.mul(&res); // z^31

        for _ in 0..50 {
            for _ in 0..5 {
                t = t.square();
            }
            res = res.mul(&t);
        }

        t.zeroize();
        res
    }

    /* ================================================================= */
    /*  Private helper methods                                           */
    /* ================================================================= */

    /// Fold the product of two field elements down to a value below
    /// 2²⁵⁵ + 361.
    ///
    /// Each pass takes N = ⌊v / 2²⁵⁵⌋, clears bits ≥ 255 and adds 19·N back,
    /// i.e. v ← v − N·p. The product is < p² < 2⁵¹⁰, so N fits in 8 digits.
    /// After the first pass v < 20·2²⁵⁵; after the second N < 20 and
    /// v < 2²⁵⁵ + 19·19.
    fn reduce_wide_approx(wide: ULong) -> UInt {
        let mut src = wide.0;
        let mut n = [0u32; DIGITS];

        for _ in 0..2 {
            for (j, n_digit) in n.iter_mut().enumerate() {
                *n_digit = (src[j + 7] >> 31) | (src[j + 8] << 1);
            }

            src[DIGITS - 1] &= 0x7FFF_FFFF;
            for digit in src[DIGITS..].iter_mut() {
                *digit = 0;
            }

            // v < 20·2²⁵⁵ fits in DIGITS + 1 digits
            let carry = mul_row(&mut src[..=DIGITS], 19, &n);
            debug_assert_eq!(carry, 0);
        }
        debug_assert_eq!(src[DIGITS], 0);

        let mut out = [0u32; DIGITS];
        out.copy_from_slice(&src[..DIGITS]);
        src.zeroize();
        n.zeroize();
        UInt(out)
    }

    /// Final reduction: subtract p while the value is ≥ p.
    ///
    /// Correct for any small multiple of p. Comparison-driven, so neither the
    /// comparison nor the number of iterations is constant-time.
    #[cfg(not(feature = "constant-time-reduce"))]
    fn reduce(mut value: UInt) -> Self {
        while value.compare(&P25519) != Ordering::Less {
            value = value.sub(&P25519).0;
        }
        FieldElement(value)
    }

    /// Final reduction by one masked conditional subtraction of p.
    ///
    /// Every caller passes a value < 2p, so a single subtraction suffices.
    #[cfg(feature = "constant-time-reduce")]
    fn reduce(value: UInt) -> Self {
        use ucrypt_internal::constant_time::{choice_from_mask, ct_select_digits};

        debug_assert_eq!(value.compare(&P25519.add(&P25519).0), Ordering::Less);
        let (diff, borrow) = value.sub(&P25519);
        // borrow set: value < p, keep it
        let keep = choice_from_mask(borrow);
        FieldElement(UInt(ct_select_digits(diff.digits(), value.digits(), keep)))
    }
}
