//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values
/// (the lengths themselves are not secret).
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Turn a borrow/carry mask (`0` or `0xFFFF_FFFF`) into a [`Choice`]
#[inline(always)]
pub fn choice_from_mask(mask: u32) -> Choice {
    Choice::from((mask & 1) as u8)
}

/// Constant-time selection between two digit vectors
///
/// Returns `a` if `choice` is 0 and `b` if `choice` is 1, digit by digit,
/// without branching on `choice`.
#[inline(always)]
pub fn ct_select_digits<const N: usize>(a: &[u32; N], b: &[u32; N], choice: Choice) -> [u32; N] {
    let mut out = [0u32; N];
    for ((out_digit, a_digit), b_digit) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *out_digit = u32::conditional_select(a_digit, b_digit, choice);
    }
    out
}
