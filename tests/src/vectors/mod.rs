//! RFC 7748 Curve25519 vectors

/// One scalar multiplication: `output = X25519(scalar, u)`
#[derive(Debug, Clone, Copy)]
pub struct ScalarMultVector {
    pub scalar: &'static str,
    pub u: &'static str,
    pub output: &'static str,
}

/// A Diffie-Hellman exchange between two parties
#[derive(Debug, Clone, Copy)]
pub struct DiffieHellmanVector {
    pub alice_secret: &'static str,
    pub alice_public: &'static str,
    pub bob_secret: &'static str,
    pub bob_public: &'static str,
    pub shared: &'static str,
}

/// RFC 7748 section 5.2, first vector.
///
/// The second vector of that section has bit 255 of u set; it is out of
/// range for a checked decode and therefore not listed.
pub const RFC7748_SCALAR_MULT: &[ScalarMultVector] = &[ScalarMultVector {
    scalar: "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
    u: "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
    output: "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
}];

/// RFC 7748 section 5.2 iterated vector: (iterations, k after iterating)
pub const RFC7748_ITERATED: &[(usize, &str)] = &[
    (1, "422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079"),
    (1000, "684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51"),
];

/// RFC 7748 section 6.1
pub const RFC7748_DIFFIE_HELLMAN: DiffieHellmanVector = DiffieHellmanVector {
    alice_secret: "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
    alice_public: "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a",
    bob_secret: "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb",
    bob_public: "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f",
    shared: "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742",
};
