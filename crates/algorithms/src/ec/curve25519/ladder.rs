//! Montgomery ladder over projective (X:Z) coordinates

use super::constants::{A24, CURVE25519_MESSAGE_SIZE, LADDER_BOTTOM_BIT, LADDER_TOP_BIT};
use super::field::FieldElement;
use zeroize::Zeroize;

/// Index of the working point that starts as the identity and ends as a·P;
/// the other one starts as 1·P.
const NQ: usize = 1;

/// A point on Curve25519 in projective Montgomery form, x = X / Z.
///
/// Z = 0 is the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub(crate) struct XzPoint {
    pub(crate) x: FieldElement,
    pub(crate) z: FieldElement,
}

impl XzPoint {
    /// The point at infinity, (1 : 0)
    pub(crate) const fn identity() -> Self {
        XzPoint {
            x: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// The affine x-coordinate `x` as (x : 1)
    pub(crate) const fn from_affine(x: FieldElement) -> Self {
        XzPoint {
            x,
            z: FieldElement::one(),
        }
    }

    /// Affine x-coordinate X · Z⁻¹; 0 for the point at infinity
    pub(crate) fn to_affine(&self) -> FieldElement {
        let mut z_inv = self.z.invert();
        let x = self.x.mul(&z_inv);
        z_inv.zeroize();
        x
    }
}

/// One combined ladder step.
///
/// Replaces `dbl` with 2·dbl and `add` with dbl + add, where `qmqp` is the
/// affine x-coordinate of the fixed difference add − dbl (or dbl − add).
pub(crate) fn monty_double_add(dbl: &mut XzPoint, add: &mut XzPoint, qmqp: &FieldElement) {
    let mut x = dbl.x.add(&dbl.z);
    let mut z = dbl.x.sub(&dbl.z);

    let mut xx = add.x.add(&add.z);
    let mut zz = add.x.sub(&add.z);

    xx = xx.mul(&z);
    zz = x.mul(&zz);
    let mut xx_ = xx.add(&zz);
    zz = xx.sub(&zz);

    add.x = xx_.square();
    zz = zz.square();
    add.z = zz.mul(qmqp);

    x = x.square();
    z = z.square();
    dbl.x = x.mul(&z);

    xx = x.sub(&z);
    z = xx.mul_small(A24);
    z = z.add(&x);
    dbl.z = xx.mul(&z);

    x.zeroize();
    z.zeroize();
    xx.zeroize();
    zz.zeroize();
    xx_.zeroize();
}

/// Run `monty_double_add` with roles chosen by `bit`: the point at index
/// `bit ^ 1` is doubled and the sum lands at index `bit`.
#[inline(always)]
fn ladder_step(points: &mut [XzPoint; 2], bit: usize, qmqp: &FieldElement) {
    let mut dbl = points[bit ^ 1];
    let mut add = points[bit];
    monty_double_add(&mut dbl, &mut add, qmqp);
    points[bit ^ 1] = dbl;
    points[bit] = add;
    dbl.zeroize();
    add.zeroize();
}

#[inline(always)]
fn scalar_bit(scalar: &[u8; CURVE25519_MESSAGE_SIZE], i: usize) -> usize {
    ((scalar[i >> 3] >> (i & 7)) & 1) as usize
}

/// x-coordinate of `scalar`·P for the point with affine x-coordinate `qmqp`.
///
/// Bit 254 of the scalar is taken as one and bits 255, 2, 1 and 0 as zero;
/// every call performs the same 255 ladder steps and one fixed inversion.
pub(crate) fn scalar_mult(
    scalar: &[u8; CURVE25519_MESSAGE_SIZE],
    qmqp: &FieldElement,
) -> FieldElement {
    let mut points = [XzPoint::from_affine(*qmqp), XzPoint::identity()];

    // Leading one: NQ <- 1·P, the other point <- 2·P
    ladder_step(&mut points, 1, qmqp);

    for i in (LADDER_BOTTOM_BIT..=LADDER_TOP_BIT).rev() {
        ladder_step(&mut points, scalar_bit(scalar, i), qmqp);
    }

    // Bits 2..0 are zero: double NQ
    for _ in 0..LADDER_BOTTOM_BIT {
        ladder_step(&mut points, 0, qmqp);
    }

    let result = points[NQ].to_affine();
    points.zeroize();
    result
}
