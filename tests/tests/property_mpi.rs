//! Property-based tests for fixed-width integers

use core::cmp::Ordering;
use proptest::prelude::*;
use ucrypt_algorithms::mpi::{UInt, BORROW, DIGITS};

fn uint() -> impl Strategy<Value = UInt> {
    any::<[u32; DIGITS]>().prop_map(UInt)
}

/// Value held in the low two digits, as a u64
fn low_u64(v: &UInt) -> u64 {
    (v.0[0] as u64) | ((v.0[1] as u64) << 32)
}

fn from_u64(v: u64) -> UInt {
    let mut digits = [0u32; DIGITS];
    digits[0] = v as u32;
    digits[1] = (v >> 32) as u32;
    UInt(digits)
}

proptest! {
    #[test]
    fn sub_then_add_restores(a in uint(), b in uint()) {
        let (diff, borrow) = a.sub(&b);
        let (back, carry) = diff.add(&b);
        prop_assert_eq!(back, a);
        prop_assert_eq!(borrow == BORROW, carry == 1);
    }

    #[test]
    fn borrow_matches_compare(a in uint(), b in uint()) {
        let (_, borrow) = a.sub(&b);
        prop_assert!(borrow == 0 || borrow == BORROW);
        prop_assert_eq!(borrow == BORROW, a.compare(&b) == Ordering::Less);
    }

    #[test]
    fn compare_is_antisymmetric(a in uint(), b in uint()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn add_commutes(a in uint(), b in uint()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn mul_wide_commutes(a in uint(), b in uint()) {
        prop_assert_eq!(a.mul_wide(&b), b.mul_wide(&a));
    }

    #[test]
    fn mul_wide_matches_u128(x in any::<u64>(), y in any::<u64>()) {
        let product = from_u64(x).mul_wide(&from_u64(y));
        let expected = (x as u128) * (y as u128);
        let low = product.low();
        prop_assert_eq!(low_u64(&low), expected as u64);
        prop_assert_eq!(
            (low.0[2] as u64) | ((low.0[3] as u64) << 32),
            (expected >> 64) as u64
        );
        prop_assert!(low.0[4..].iter().all(|&d| d == 0));
        prop_assert_eq!(product.high(), UInt::ZERO);
    }

    #[test]
    fn mul_wide_distributes_over_small_add(a in uint(), x in any::<u16>(), y in any::<u16>()) {
        // a·(x + y) = a·x + a·y, with x + y well inside one digit
        let xy = UInt::from_small(x as u32 + y as u32);
        let ax = a.mul_wide(&UInt::from_small(x as u32));
        let ay = a.mul_wide(&UInt::from_small(y as u32));
        let (low, carry) = ax.low().add(&ay.low());
        let (high, _) = ax.high().add(&ay.high());
        let (high, _) = high.add(&UInt::from_small(carry));
        let axy = a.mul_wide(&xy);
        prop_assert_eq!(axy.low(), low);
        prop_assert_eq!(axy.high(), high);
    }
}
