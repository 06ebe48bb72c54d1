//! Property-based tests for F25519 arithmetic

use proptest::prelude::*;
use ucrypt_algorithms::ec::curve25519::FieldElement;

/// Canonical field elements: top bit cleared, the few values in [p, 2²⁵⁵)
/// filtered out
fn field_element() -> impl Strategy<Value = FieldElement> {
    any::<[u8; 32]>().prop_filter_map("value must be below p", |mut bytes| {
        bytes[31] &= 0x7F;
        FieldElement::from_bytes(&bytes).ok()
    })
}

/// Decoding accepts exactly the canonical values
fn is_canonical(fe: &FieldElement) -> bool {
    FieldElement::from_bytes(&fe.to_bytes()) == Ok(*fe)
}

proptest! {
    #[test]
    fn add_commutes(a in field_element(), b in field_element()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn mul_commutes(a in field_element(), b in field_element()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn add_associates(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn mul_associates(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
    }

    #[test]
    fn mul_distributes(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!(a.mul(&b.sub(&c)), a.mul(&b).sub(&a.mul(&c)));
    }

    #[test]
    fn sub_undoes_add(a in field_element(), b in field_element()) {
        prop_assert_eq!(a.add(&b).sub(&b), a);
        prop_assert_eq!(a.sub(&b).add(&b), a);
    }

    #[test]
    fn results_stay_canonical(a in field_element(), b in field_element(), k in any::<u32>()) {
        prop_assert!(is_canonical(&a.add(&b)));
        prop_assert!(is_canonical(&a.sub(&b)));
        prop_assert!(is_canonical(&a.mul(&b)));
        prop_assert!(is_canonical(&a.square()));
        prop_assert!(is_canonical(&a.mul_small(k)));
    }

    #[test]
    fn square_matches_mul(a in field_element()) {
        prop_assert_eq!(a.square(), a.mul(&a));
    }

    #[test]
    fn mul_small_matches_mul(a in field_element(), k in any::<u32>()) {
        prop_assert_eq!(a.mul_small(k), a.mul(&FieldElement::from_u32(k)));
    }

    #[test]
    fn decode_rejects_top_bit(mut bytes in any::<[u8; 32]>()) {
        bytes[31] |= 0x80;
        prop_assert!(FieldElement::from_bytes(&bytes).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn invert_is_inverse(a in field_element()) {
        prop_assume!(!a.is_zero());
        prop_assert_eq!(a.mul(&a.invert()), FieldElement::one());
    }
}
