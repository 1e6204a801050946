//! Group operations on Curve25519 in twisted Edwards form, together with
//! the Ristretto prime-order group built on top of it.
//!
//! The crate provides four layers, from the bottom up:
//!
//! * arithmetic in the prime field \\( \mathbb F_p \\), \\( p = 2^{255} - 19 \\)
//!   (crate-internal);
//! * arithmetic on scalars, integers mod the group order
//!   \\( \ell = 2^{252} + 27742317777372353535851937790883648493 \\);
//! * point arithmetic on the twisted Edwards curve
//!   \\( -x^2 + y^2 = 1 + dx^2y^2 \\) with \\( d = -121665/121666 \\);
//! * the Ristretto encoding, which quotients away the curve's 4-torsion
//!   to obtain a group of prime order \\( \ell \\).
//!
//! All arithmetic on potentially-secret inputs runs in constant time; the
//! single variable-time entry point,
//! `EdwardsPoint::vartime_double_scalar_mul_basepoint`, is named and
//! documented as such and must only ever see public inputs.

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub mod backend;
pub mod constant_time;
pub mod constants;
pub mod edwards;
pub mod errors;
pub mod field;
pub mod ristretto;
pub mod scalar;
pub mod traits;
pub mod window;

pub use crate::edwards::{CompressedEdwardsY, EdwardsBasepointTable, EdwardsPoint};
pub use crate::errors::DecodingError;
pub use crate::ristretto::{CompressedRistretto, RistrettoGeneratorTable, RistrettoPoint};
pub use crate::scalar::Scalar;
