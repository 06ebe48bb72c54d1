//! Property-based tests for the Curve25519 ladder and X25519

use proptest::prelude::*;
use ucrypt_algorithms::ec::curve25519::{curve25519, x25519, Curve25519Message};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn key_agreement_is_symmetric(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let alice = x25519::SecretKey::from_bytes(a);
        let bob = x25519::SecretKey::from_bytes(b);
        let alice_pk = alice.public_key().unwrap();
        let bob_pk = bob.public_key().unwrap();

        prop_assert_eq!(
            alice.diffie_hellman(&bob_pk).unwrap(),
            bob.diffie_hellman(&alice_pk).unwrap()
        );
    }

    #[test]
    fn fixed_bits_do_not_matter(
        scalar in any::<[u8; 32]>(),
        bit in prop::sample::select(vec![0usize, 1, 2, 254, 255]),
    ) {
        let mut flipped = scalar;
        flipped[bit >> 3] ^= 1 << (bit & 7);

        let a = curve25519(&Curve25519Message::new(scalar), &x25519::BASE_POINT).unwrap();
        let b = curve25519(&Curve25519Message::new(flipped), &x25519::BASE_POINT).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn zero_base_point_maps_to_zero(scalar in any::<[u8; 32]>()) {
        let zero = Curve25519Message::new([0u8; 32]);
        prop_assert_eq!(curve25519(&Curve25519Message::new(scalar), &zero).unwrap(), zero);
    }

    #[test]
    fn scalar_mult_is_deterministic(scalar in any::<[u8; 32]>()) {
        let k = Curve25519Message::new(scalar);
        prop_assert_eq!(
            curve25519(&k, &x25519::BASE_POINT).unwrap(),
            curve25519(&k, &x25519::BASE_POINT).unwrap()
        );
    }
}

#[test]
fn generated_keypairs_agree() {
    let mut rng = ucrypt_tests::seeded_rng(7);
    for _ in 0..4 {
        let (sk_a, pk_a) = x25519::generate_keypair(&mut rng).unwrap();
        let (sk_b, pk_b) = x25519::generate_keypair(&mut rng).unwrap();
        assert_eq!(sk_a.diffie_hellman(&pk_b).unwrap(), sk_b.diffie_hellman(&pk_a).unwrap());
    }
}
