//! Various constants, such as the Ristretto and Ed25519 basepoints.
//!
//! The bit-exact limb encodings of the curve constants live in the
//! backend's `constants` module; this module holds the curve-level
//! values and the large precomputed tables.
//!
//! The basepoint tables are too large to write out as literals, so they
//! are computed from the basepoint behind a guaranteed-once lazy
//! initialization; after construction they are never written again and
//! may be shared freely across threads.

use core::ops::Mul;

use lazy_static::lazy_static;

use crate::edwards::{AffineNielsPoint, CompressedEdwardsY, EdwardsBasepointTable, EdwardsPoint};
use crate::ristretto::{CompressedRistretto, RistrettoGeneratorTable, RistrettoPoint};
use crate::scalar::Scalar;
use crate::window::NafLookupTable5;

pub use crate::backend::serial::u32::constants::ED25519_BASEPOINT_POINT;
pub use crate::backend::serial::u32::constants::EIGHT_TORSION;

/// The Ed25519 basepoint, in `CompressedEdwardsY` format.
///
/// This is the little-endian byte encoding of \\( 4/5 \pmod p \\),
/// which is the \\( y \\)-coordinate of the basepoint.
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66,
]);

/// The Ristretto generator, in `CompressedRistretto` format.
pub const RISTRETTO_GENERATOR_COMPRESSED: CompressedRistretto = CompressedRistretto([
    0xe2, 0xf2, 0xae, 0x0a, 0x6a, 0xbc, 0x4e, 0x71, 0xa8, 0x84, 0xa9, 0x61, 0xc5, 0x00, 0x51,
    0x5f, 0x58, 0xe3, 0x0b, 0x6a, 0xa5, 0x82, 0xdd, 0x8d, 0xb6, 0xa6, 0x59, 0x45, 0xe0, 0x8d,
    0x2d, 0x76,
]);

/// The Ristretto generator, as a `RistrettoPoint`.
///
/// The generator of the Ristretto group is the image of the Ed25519
/// basepoint under the quotient map.
pub const RISTRETTO_GENERATOR: RistrettoPoint = RistrettoPoint(ED25519_BASEPOINT_POINT);

/// `BASEPOINT_ORDER` is the order of the Ristretto group and of the
/// Ed25519 basepoint, i.e.,
/// $$
/// \ell = 2\^{252} + 27742317777372353535851937790883648493.
/// $$
pub const BASEPOINT_ORDER: Scalar = Scalar {
    bytes: [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
        0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x10,
    ],
};

lazy_static! {
    /// Table containing precomputed multiples of the Ed25519 basepoint
    /// \\(B = (x, 4/5)\\) with \\(x\\) positive, for fixed-base scalar
    /// multiplication.
    pub static ref ED25519_BASEPOINT_TABLE: EdwardsBasepointTable =
        EdwardsBasepointTable::create(&ED25519_BASEPOINT_POINT);

    /// Odd multiples \\([1]B, [3]B, \ldots, [15]B\\) of the Ed25519
    /// basepoint, in affine Niels coordinates, for the variable-time
    /// double-base scalar multiplication.
    pub(crate) static ref AFFINE_ODD_MULTIPLES_OF_BASEPOINT:
        NafLookupTable5<AffineNielsPoint> =
        NafLookupTable5::from(&ED25519_BASEPOINT_POINT);

    /// Table containing precomputed multiples of the Ristretto
    /// generator, for fixed-base scalar multiplication.
    pub static ref RISTRETTO_GENERATOR_TABLE: RistrettoGeneratorTable =
        RistrettoGeneratorTable::create(&RISTRETTO_GENERATOR);
}

// The statics above are lazily initialized, so their names denote
// generated wrapper types that `Deref` to the table types.  Method
// calls auto-deref, but operators do not, so forward the `Mul` impls
// to keep `&ED25519_BASEPOINT_TABLE * &scalar` working as it would on
// a plain static.

impl<'a, 'b> Mul<&'b Scalar> for &'a ED25519_BASEPOINT_TABLE {
    type Output = EdwardsPoint;

    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        self.basepoint_mul(scalar)
    }
}

impl<'a, 'b> Mul<&'a ED25519_BASEPOINT_TABLE> for &'b Scalar {
    type Output = EdwardsPoint;

    fn mul(self, table: &'a ED25519_BASEPOINT_TABLE) -> EdwardsPoint {
        table.basepoint_mul(self)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a RISTRETTO_GENERATOR_TABLE {
    type Output = RistrettoPoint;

    fn mul(self, scalar: &'b Scalar) -> RistrettoPoint {
        let table: &RistrettoGeneratorTable = self;
        table * scalar
    }
}

impl<'a, 'b> Mul<&'a RISTRETTO_GENERATOR_TABLE> for &'b Scalar {
    type Output = RistrettoPoint;

    fn mul(self, table: &'a RISTRETTO_GENERATOR_TABLE) -> RistrettoPoint {
        table * self
    }
}
