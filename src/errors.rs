//! Errors raised while parsing and decoding the 32-byte wire forms.

use thiserror::Error;

/// The ways in which a byte string can fail to become a group element.
///
/// There are exactly two kinds.  `InvalidRepresentation` is structural and
/// is raised at construction time: the byte string has the wrong length, or
/// violates an invariant of the type itself (a scalar whose high bit is
/// set).  `InvalidEncoding` is semantic and is raised during decompression:
/// the bytes are well-formed but do not name a valid curve point or
/// Ristretto element.
///
/// Decoding failures are terminal for the operation that raised them; there
/// is no retry or recovery. Arithmetic never fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DecodingError {
    /// A byte array handed to a constructor had the wrong length or broke a
    /// structural invariant of the type.
    #[error("byte representation is structurally invalid")]
    InvalidRepresentation,
    /// A well-formed byte array did not decode to a valid group element:
    /// the field element was not canonical, the decompression square root
    /// did not exist, or one of Ristretto's sign/zero checks failed.
    #[error("bytes do not encode a valid group element")]
    InvalidEncoding,
}
