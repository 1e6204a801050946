//! Arithmetic on scalars, the integers mod the group order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\).
//!
//! \\( \ell \\) is the (prime) order of the Ristretto group and of the
//! prime-order subgroup generated by the Ed25519 basepoint, so a
//! [`Scalar`](struct.Scalar.html) is what a curve point gets multiplied
//! by.
//!
//! There are several ways to obtain one:
//!
//! * [`Scalar::from_canonical_bytes`] parses a 32-byte string that is
//!   required to already be the canonical encoding of an integer below
//!   \\( \ell \\), reporting a
//!   [`DecodingError`](crate::errors::DecodingError) otherwise;
//! * [`Scalar::from_bytes_mod_order`] and
//!   [`Scalar::from_bytes_mod_order_wide`] reduce a 256-bit or 512-bit
//!   little-endian integer mod \\( \ell \\);
//! * [`Scalar::hash_from_bytes`] and [`Scalar::from_hash`] derive a
//!   scalar from a 64-byte-output `Digest`;
//! * [`Scalar::from_bits`] keeps a caller-supplied bit pattern as-is
//!   (for X/Ed25519-style "clamped" scalars), clearing only the top
//!   bit.  Such a value need not be reduced mod \\( \ell \\); the
//!   arithmetic below accounts for that.

use core::borrow::Borrow;
use core::cmp::{Eq, PartialEq};
use core::fmt::Debug;
use core::iter::{Product, Sum};
use core::ops::Index;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use rand_core::{CryptoRng, RngCore};

use digest::generic_array::typenum::U64;
use digest::Digest;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use zeroize::Zeroize;

use crate::backend;
use crate::backend::serial::u32::constants;
use crate::errors::DecodingError;

/// An `UnpackedScalar` is a scalar unpacked into limb form for
/// arithmetic; the packed [`Scalar`] form is for storage and transport.
///
/// This is a type alias for the scalar type of the active backend.
type UnpackedScalar = backend::serial::u32::scalar::Scalar29;

/// An element of \\(\mathbb Z / \ell\\), held as an integer
/// \\(s < 2\^{255}\\) in packed byte form.
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// The little-endian byte encoding of the integer.
    ///
    /// # Invariant
    ///
    /// The high bit of `bytes[31]` is always zero, i.e. the integer is
    /// below \\(2\^{255}\\).  Every constructor enforces this; the NAF
    /// expansion relies on the headroom it leaves for a carry.
    //
    // Crate-visible (rather than private) so that the `constants`
    // module can spell out literal scalars.
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// Interpret the input as a 256-bit little-endian integer and
    /// return its residue mod \\( \ell \\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        // The input may exceed 2^255; `reduce` goes through the limb
        // form, which carries all 256 bits, so the invariant holds on
        // the way out rather than the way in.
        let s = Scalar { bytes }.reduce();
        debug_assert_eq!(0u8, s[31] >> 7);

        s
    }

    /// Interpret the input as a 512-bit little-endian integer and
    /// return its residue mod \\( \ell \\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        UnpackedScalar::from_bytes_wide(input).pack()
    }

    /// Attempt to construct a `Scalar` from a canonical byte
    /// representation.
    ///
    /// # Return
    ///
    /// - `Ok(s)`, where `s` is the `Scalar` corresponding to `bytes`, if
    ///   `bytes` is the canonical encoding of an integer below
    ///   \\( \ell \\);
    /// - `Err(DecodingError::InvalidRepresentation)` if the high bit of
    ///   `bytes[31]` is set;
    /// - `Err(DecodingError::InvalidEncoding)` if `bytes` encodes an
    ///   integer \\( \geq \ell \\).
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> Result<Scalar, DecodingError> {
        if (bytes[31] >> 7) != 0u8 {
            // structurally invalid: the reserved bit is in use
            return Err(DecodingError::InvalidRepresentation);
        }
        let candidate = Scalar::from_bits(bytes);
        if !candidate.is_canonical() {
            return Err(DecodingError::InvalidEncoding);
        }

        Ok(candidate)
    }

    /// Construct a `Scalar` from the low 255 bits of a 256-bit integer,
    /// without reducing mod \\( \ell \\).
    ///
    /// This is the escape hatch for protocols (such as X25519 clamping)
    /// that prescribe exact bit patterns.  Only the high bit is
    /// cleared, to maintain the type invariant.
    pub const fn from_bits(bytes: [u8; 32]) -> Scalar {
        let mut s = Scalar { bytes };
        s.bytes[31] &= 0b0111_1111;

        s
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Scalar{{ bytes: {:?} }}", &self.bytes)
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).unwrap_u8() == 1u8
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl Index<usize> for Scalar {
    type Output = u8;

    /// Read byte `index` of the canonical little-endian encoding.
    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

// ------------------------------------------------------------------------
// Arithmetic operators
//
// Inputs may be unreduced (Scalar::from_bits admits anything below
// 2^255), so the additive operators pull both operands through
// `unpack_reduced` first; the backend add/sub then keep reduced inputs
// reduced.  Multiplication reduces as a side effect of the Montgomery
// round trip and takes the raw unpacked form directly.
// ------------------------------------------------------------------------

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::mul(&self.unpack(), &rhs.unpack()).pack()
    }
}

impl<'b> MulAssign<&'b Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self * rhs;
    }
}

define_mul_assign_variants!(LHS = Scalar, RHS = Scalar);
define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn add(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::add(&self.unpack_reduced(), &rhs.unpack_reduced()).pack()
    }
}

impl<'b> AddAssign<&'b Scalar> for Scalar {
    fn add_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = Scalar, RHS = Scalar);
define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        UnpackedScalar::sub(&self.unpack_reduced(), &rhs.unpack_reduced()).pack()
    }
}

impl<'b> SubAssign<&'b Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self - rhs;
    }
}

define_sub_assign_variants!(LHS = Scalar, RHS = Scalar);
define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        UnpackedScalar::sub(&UnpackedScalar::zero(), &self.unpack_reduced()).pack()
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 32];
        for ((out, x), y) in bytes.iter_mut().zip(a.bytes.iter()).zip(b.bytes.iter()) {
            *out = u8::conditional_select(x, y, choice);
        }
        Scalar { bytes }
    }
}

// ------------------------------------------------------------------------
// Serde support: the wire form is the canonical 32-byte encoding, and
// deserialization re-validates it.
// ------------------------------------------------------------------------

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                formatter.write_str("the canonical 32-byte encoding of a scalar")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                for (i, byte) in bytes.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                Scalar::from_canonical_bytes(bytes)
                    .map_err(|_| serde::de::Error::custom(&"scalar was not canonically encoded"))
            }
        }

        deserializer.deserialize_tuple(32, ScalarVisitor)
    }
}

impl<T: Borrow<Scalar>> Product<T> for Scalar {
    fn product<I: Iterator<Item = T>>(iter: I) -> Scalar {
        iter.fold(Scalar::one(), |acc, x| &acc * x.borrow())
    }
}

impl<T: Borrow<Scalar>> Sum<T> for Scalar {
    fn sum<I: Iterator<Item = T>>(iter: I) -> Scalar {
        iter.fold(Scalar::zero(), |acc, x| &acc + x.borrow())
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::zero()
    }
}

macro_rules! impl_scalar_from_uint {
    ($($t:ty),+ $(,)?) => {$(
        impl From<$t> for Scalar {
            fn from(x: $t) -> Scalar {
                use byteorder::{ByteOrder, LittleEndian};
                let mut bytes = [0u8; 32];
                LittleEndian::write_uint128(
                    &mut bytes,
                    x as u128,
                    ::core::mem::size_of::<$t>(),
                );
                Scalar { bytes }
            }
        }
    )+};
}

impl_scalar_from_uint! { u8, u16, u32, u64, u128 }

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Scalar {
    /// Return a `Scalar` chosen uniformly at random using a
    /// user-provided RNG.
    ///
    /// Draws 64 bytes from `rng` (any `RngCore + CryptoRng`) and
    /// reduces them, so the result is unbiased mod \\( \ell \\).
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut scalar_bytes = [0u8; 64];
        rng.fill_bytes(&mut scalar_bytes);
        Scalar::from_bytes_mod_order_wide(&scalar_bytes)
    }

    /// Hash a slice of bytes into a scalar, by feeding it to a fresh
    /// instance of the 64-byte-output `Digest` `D` and reducing the
    /// result wide.
    pub fn hash_from_bytes<D>(input: &[u8]) -> Scalar
    where
        D: Digest<OutputSize = U64> + Default,
    {
        let mut hash = D::default();
        hash.update(input);
        Scalar::from_hash(hash)
    }

    /// Construct a scalar from an existing `Digest` instance, for
    /// callers that stream data into the hash rather than passing a
    /// single slice.
    pub fn from_hash<D>(hash: D) -> Scalar
    where
        D: Digest<OutputSize = U64>,
    {
        let mut wide = [0u8; 64];
        wide.copy_from_slice(hash.finalize().as_slice());
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    /// Copy out the canonical 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the little-endian byte encoding of the integer representing
    /// this `Scalar`.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// The scalar \\( 0 \\).
    pub fn zero() -> Self {
        Scalar { bytes: [0u8; 32] }
    }

    /// The scalar \\( 1 \\).
    pub fn one() -> Self {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        Scalar { bytes }
    }

    /// Compute \\( ab + c \bmod \ell \\).
    ///
    /// The result is bit-exact with `a * b + c` computed through the
    /// operator impls; this entry point exists for callers that want
    /// the fused form (e.g. computing \\( s = r + kx \\) in a signature
    /// scheme).
    pub fn multiply_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        &(a * b) + c
    }

    /// The multiplicative inverse of this (nonzero) scalar.
    ///
    /// # Warning
    ///
    /// The zero scalar has no inverse; `self` **MUST** be nonzero, and
    /// callers that cannot prove it should not call this.
    pub fn invert(&self) -> Scalar {
        self.unpack().invert().pack()
    }

    /// Given a slice of nonzero (possibly secret) `Scalar`s, replace
    /// each element with its inverse, using a single field inversion.
    ///
    /// # Return
    ///
    /// The product of all the inverses.
    ///
    /// # Warning
    ///
    /// A single zero input poisons every output; all inputs **MUST** be
    /// nonzero.
    pub fn batch_invert(inputs: &mut [Scalar]) -> Scalar {
        // Montgomery's trick: invert the running product once, then
        // peel the individual inverses back out of it.  The partial
        // products are as secret as the inputs, so the scratch space is
        // wiped when it drops.
        use zeroize::Zeroizing;

        let n = inputs.len();
        let mut partials = Zeroizing::new(vec![UnpackedScalar::zero(); n]);
        let mut acc = Scalar::one().unpack().to_montgomery();

        // Forward pass: partials[i] holds the product of inputs[..i].
        // The inputs themselves are left in Montgomery form to spare a
        // conversion in the backward pass.
        for (input, partial) in inputs.iter_mut().zip(partials.iter_mut()) {
            *partial = acc;
            let x = input.unpack().to_montgomery();
            *input = x.pack();
            acc = UnpackedScalar::montgomery_mul(&acc, &x);
        }

        // acc is zero iff some input was zero
        debug_assert!(acc.pack() != Scalar::zero());

        acc = acc.montgomery_invert().from_montgomery();
        let product_inverse = acc.pack();

        // Backward pass: acc holds the inverse of the product of
        // inputs[..=i]; multiplying by the forward partial isolates the
        // inverse of inputs[i].
        for (input, partial) in inputs.iter_mut().rev().zip(partials.iter().rev()) {
            let acc_next = UnpackedScalar::montgomery_mul(&acc, &input.unpack());
            *input = UnpackedScalar::montgomery_mul(&acc, partial).pack();
            acc = acc_next;
        }

        product_inverse
    }

    /// Expand this scalar into 64 signed radix-16 digits
    /// \\(a\_i \in [-8,8)\\), so that
    /// $$
    ///    a = a\_0 + a\_1 16\^1 + \cdots + a_{63} 16\^{63},
    /// $$
    /// with \\(-8 \leq a_i < 8\\) for \\(0 \leq i < 63\\) and
    /// \\(-8 \leq a_{63} \leq 8\\).
    pub(crate) fn to_radix_16(&self) -> [i8; 64] {
        debug_assert!(self[31] <= 127);
        let mut digits = [0i8; 64];

        // Split each byte into two radix-16 digits, then recenter each
        // digit from [0,16) into [-8,8) by borrowing 16 from the digit
        // above whenever a digit would land in [8,16).
        for (i, byte) in self.bytes.iter().enumerate() {
            digits[2 * i] = (byte & 15) as i8;
            digits[2 * i + 1] = (byte >> 4) as i8;
        }

        for i in 0..63 {
            let carry = (digits[i] + 8) >> 4;
            digits[i] -= carry << 4;
            digits[i + 1] += carry;
        }
        // digits[63] is never recentered; since the top bit of the
        // scalar is clear it starts at most 7 and the incoming borrow
        // raises it to at most 8.

        digits
    }

    /// Compute a width-\\(w\\) "Non-Adjacent Form" of this scalar.
    ///
    /// A width-\\(w\\) NAF of a positive integer \\(k\\) is an expression
    /// $$
    /// k = \sum_{i=0}\^m n\_i 2\^i,
    /// $$
    /// where each nonzero coefficient \\(n\_i\\) is odd and bounded by
    /// \\(|n\_i| < 2\^{w-1} \\), \\(n\_{m-1}\\) is nonzero, and at most
    /// one of any \\(w\\) consecutive coefficients is nonzero.
    ///
    /// Intended for use with \\(w = 5\\) by the variable-time
    /// double-base multiplication; the expansion leaks the bit pattern
    /// of the scalar and must only see public inputs.
    pub(crate) fn non_adjacent_form(&self, w: usize) -> [i8; 256] {
        // required by the NAF definition
        debug_assert!(w >= 2);
        // required so that the NAF digits fit in i8
        debug_assert!(w <= 8);

        use byteorder::{ByteOrder, LittleEndian};

        let mut naf = [0i8; 256];

        // A fifth zero word gives the sliding window below headroom to
        // read past bit 255.
        let mut x_u64 = [0u64; 5];
        LittleEndian::read_u64_into(&self.bytes, &mut x_u64[0..4]);

        let width = 1 << w;
        let window_mask = width - 1;

        let mut pos = 0;
        let mut carry = 0;
        while pos < 256 {
            // w bits of the scalar starting at bit `pos`, possibly
            // spanning two words
            let u64_idx = pos / 64;
            let bit_idx = pos % 64;
            let bit_buf: u64 = if bit_idx < 64 - w {
                x_u64[u64_idx] >> bit_idx
            } else {
                (x_u64[u64_idx] >> bit_idx) | (x_u64[1 + u64_idx] << (64 - bit_idx))
            };

            let window = carry + (bit_buf & window_mask);

            if window & 1 == 0 {
                // An even window is either all-zero, or a pending carry
                // about to meet the set bit just above; either way the
                // carry survives unchanged and the window slides by one.
                pos += 1;
                continue;
            }

            if window < width / 2 {
                carry = 0;
                naf[pos] = window as i8;
            } else {
                // Record window - 2^w (odd and negative) and push the
                // borrowed 2^w up to the next window.
                carry = 1;
                naf[pos] = (window as i8).wrapping_sub(width as i8);
            }

            pos += w;
        }

        naf
    }

    /// Unpack this `Scalar` into limb form, without reducing.
    pub(crate) fn unpack(&self) -> UnpackedScalar {
        UnpackedScalar::from_bytes(&self.bytes)
    }

    /// Unpack this `Scalar` into limb form and reduce it mod
    /// \\( \ell \\).
    ///
    /// A Montgomery multiplication by \\( R \\) divides the factor of
    /// \\( R \\) straight back out, leaving the canonical
    /// representative.
    fn unpack_reduced(&self) -> UnpackedScalar {
        UnpackedScalar::montgomery_mul(&self.unpack(), &constants::R)
    }

    /// The canonical representative of this scalar mod \\(\ell\\).
    pub fn reduce(&self) -> Scalar {
        self.unpack_reduced().pack()
    }

    /// Check whether this `Scalar` is the canonical representative mod
    /// \\(\ell\\).
    ///
    /// Intended for input validation, where variable time is
    /// acceptable.
    pub fn is_canonical(&self) -> bool {
        self == &self.reduce()
    }
}

impl UnpackedScalar {
    /// Repack the limbs into the byte form.
    fn pack(&self) -> Scalar {
        Scalar {
            bytes: self.to_bytes(),
        }
    }

    /// Invert a scalar held in Montgomery form.
    pub fn montgomery_invert(&self) -> UnpackedScalar {
        // Fixed-window exponentiation by l - 2, following the addition
        // chain from
        // https://briansmith.org/ecc-inversion-addition-chains-01#curve25519_scalar_inversion
        // restated as a table of (squarings, window) steps.

        // odd powers: powers[i] = self^(2i + 1)
        let mut powers = [*self; 8];
        let square = self.montgomery_square();
        for i in 1..8 {
            powers[i] = UnpackedScalar::montgomery_mul(&powers[i - 1], &square);
        }

        // self^16
        let mut acc = UnpackedScalar::montgomery_mul(&powers[7], self);

        // Each step squares `squarings` times and multiplies in the odd
        // power `window`; reading out the windows in order spells the
        // bits of l - 2.
        const CHAIN: [(usize, usize); 27] = [
            (126, 5),
            (4, 3),
            (5, 15),
            (5, 15),
            (4, 9),
            (2, 3),
            (5, 15),
            (4, 5),
            (6, 5),
            (3, 7),
            (5, 15),
            (5, 7),
            (4, 3),
            (5, 11),
            (6, 11),
            (10, 9),
            (4, 3),
            (5, 3),
            (5, 3),
            (5, 9),
            (4, 7),
            (6, 15),
            (5, 11),
            (3, 5),
            (6, 15),
            (3, 5),
            (3, 3),
        ];
        for &(squarings, window) in CHAIN.iter() {
            for _ in 0..squarings {
                acc = acc.montgomery_square();
            }
            acc = UnpackedScalar::montgomery_mul(&acc, &powers[window / 2]);
        }

        acc
    }

    /// Invert a scalar not in Montgomery form.
    pub fn invert(&self) -> UnpackedScalar {
        self.to_montgomery().montgomery_invert().from_montgomery()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// x = 2238329342913194256032495932344128051776374960164957527413114840482143558222
    pub static X: Scalar = Scalar {
        bytes: [
            0x4e, 0x5a, 0xb4, 0x34, 0x5d, 0x47, 0x08, 0x84, 0x59, 0x13, 0xb4, 0x64, 0x1b, 0xc2,
            0x7d, 0x52, 0x52, 0xa5, 0x85, 0x10, 0x1b, 0xcc, 0x42, 0x44, 0xd4, 0x49, 0xf4, 0xa8,
            0x79, 0xd9, 0xf2, 0x04,
        ],
    };

    /// 1/x = 6859937278830797291664592131120606308688036382723378951768035303146619657244
    pub static XINV: Scalar = Scalar {
        bytes: [
            0x1c, 0xdc, 0x17, 0xfc, 0xe0, 0xe9, 0xa5, 0xbb, 0xd9, 0x24, 0x7e, 0x56, 0xbb, 0x01,
            0x63, 0x47, 0xbb, 0xba, 0x31, 0xed, 0xd5, 0xa9, 0xbb, 0x96, 0xd5, 0x0b, 0xcd, 0x7a,
            0x3f, 0x96, 0x2a, 0x0f,
        ],
    };

    /// y = 2592331292931086675770238855846338635550719849568364935475441891787804997264
    pub static Y: Scalar = Scalar {
        bytes: [
            0x90, 0x76, 0x33, 0xfe, 0x1c, 0x4b, 0x66, 0xa4, 0xa2, 0x8d, 0x2d, 0xd7, 0x67, 0x83,
            0x86, 0xc3, 0x53, 0xd0, 0xde, 0x54, 0x55, 0xd4, 0xfc, 0x9d, 0xe8, 0xef, 0x7a, 0xc3,
            0x1f, 0x35, 0xbb, 0x05,
        ],
    };

    /// x*y = 5690045403673944803228348699031245560686958845067437804563560795922180092780
    static X_TIMES_Y: Scalar = Scalar {
        bytes: [
            0x6c, 0x33, 0x74, 0xa1, 0x89, 0x4f, 0x62, 0x21, 0x0a, 0xaa, 0x2f, 0xe1, 0x86, 0xa6,
            0xf9, 0x2c, 0xe0, 0xaa, 0x75, 0xc2, 0x77, 0x95, 0x81, 0xc2, 0x95, 0xfc, 0x08, 0x17,
            0x9a, 0x73, 0x94, 0x0c,
        ],
    };

    /// The largest clamped integer
    static LARGEST_CLAMPED_INTEGER: [u8; 32] = [
        0xf8, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ];

    /// sha512("Hello, world!")'s reduction mod l, computed with an
    /// independent implementation
    static HASH_OF_HELLO_WORLD: [u8; 32] = [
        0x53, 0x33, 0x00, 0xb2, 0x35, 0x52, 0xda, 0xd4, 0x4c, 0x0c, 0xda, 0x41, 0x62, 0xa8, 0xc6,
        0xae, 0x31, 0x73, 0xf5, 0x8f, 0x19, 0x40, 0xab, 0x9f, 0x55, 0xc8, 0x61, 0x86, 0xfb, 0x19,
        0x27, 0x07,
    ];

    #[test]
    fn fuzzer_testcase_reduction() {
        // LE bytes of 24519928653854221733733552434404946937899825954937634815
        let a_bytes = [
            255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
            255, 255, 255, 255, 255, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        // LE bytes of 4975441334415930272102238714655435858932909858769107544962110018543083847680
        let b_bytes = [
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 210, 210, 210, 255, 255,
            255, 255, 255, 255, 255, 255, 10,
        ];
        // LE bytes of 741511816910815538493763786095918022957034822953284566926872681130404032742
        // = a*b (mod l)
        let c_bytes = [
            230, 48, 99, 193, 214, 57, 116, 247, 75, 120, 230, 89, 117, 177, 213, 83, 155, 18,
            212, 115, 55, 186, 91, 35, 225, 17, 194, 235, 73, 174, 163, 1,
        ];

        let a = Scalar::from_bytes_mod_order(a_bytes);
        let b = Scalar::from_bytes_mod_order(b_bytes);
        let c = Scalar::from_bytes_mod_order(c_bytes);

        let mut tmp = [0u8; 64];

        // also_a = (a mod l)
        tmp[0..32].copy_from_slice(&a_bytes[..]);
        let also_a = Scalar::from_bytes_mod_order_wide(&tmp);

        // also_b = (b mod l)
        tmp[0..32].copy_from_slice(&b_bytes[..]);
        let also_b = Scalar::from_bytes_mod_order_wide(&tmp);

        let expected_c = &a * &b;
        let also_expected_c = &also_a * &also_b;

        assert_eq!(c, expected_c);
        assert_eq!(c, also_expected_c);
    }

    #[test]
    fn non_adjacent_form_test_vector() {
        let ascalar = Scalar::from_bytes_mod_order([
            0x1a, 0x0e, 0x97, 0x8a, 0x90, 0xf6, 0x62, 0x2d, 0x37, 0x47, 0x02, 0x3f, 0x8a, 0xd8,
            0x26, 0x4d, 0xa7, 0x58, 0xaa, 0x1b, 0x88, 0xe0, 0x40, 0xd1, 0x58, 0x9e, 0x7b, 0x7f,
            0x23, 0x76, 0xef, 0x09,
        ]);

        let naf = ascalar.non_adjacent_form(5);

        // The digits reconstruct the scalar under sum(naf[i] * 2^i),
        // all nonzero digits are odd, |digit| < 16, and nonzero digits
        // are at least 5 positions apart.
        let mut last_nonzero: Option<usize> = None;
        for i in 0..256 {
            if naf[i] != 0 {
                assert_eq!((naf[i] as i32).rem_euclid(2), 1);
                assert!((naf[i] as i32).abs() < 16);
                if let Some(j) = last_nonzero {
                    assert!(i - j >= 5);
                }
                last_nonzero = Some(i);
            }
        }

        // Reconstruct sum(naf[i] 2^i) mod l and compare
        let mut recons = Scalar::zero();
        for i in (0..256).rev() {
            recons = &recons + &recons;
            if naf[i] > 0 {
                recons = &recons + &Scalar::from(naf[i] as u8);
            } else if naf[i] < 0 {
                recons = &recons - &Scalar::from((-naf[i]) as u8);
            }
        }
        assert_eq!(recons, ascalar);
    }

    #[test]
    fn from_u64() {
        let val: u64 = 0xdeadbeefdeadbeef;
        let s = Scalar::from(val);
        assert_eq!(s[7], 0xde);
        assert_eq!(s[6], 0xad);
        assert_eq!(s[5], 0xbe);
        assert_eq!(s[4], 0xef);
        assert_eq!(s[3], 0xde);
        assert_eq!(s[2], 0xad);
        assert_eq!(s[1], 0xbe);
        assert_eq!(s[0], 0xef);
    }

    #[test]
    fn scalar_mul_by_one() {
        let test_scalar = &X * &Scalar::one();
        for i in 0..32 {
            assert!(test_scalar[i] == X[i]);
        }
    }

    #[test]
    fn impl_add() {
        let two = Scalar::from(2u64);
        let one = Scalar::one();
        let should_be_two = &one + &one;
        assert_eq!(should_be_two, two);
    }

    #[allow(non_snake_case)]
    #[test]
    fn impl_mul() {
        let should_be_X_times_Y = &X * &Y;
        assert_eq!(should_be_X_times_Y, X_TIMES_Y);
    }

    #[test]
    fn impl_product() {
        // Test that product works for non-empty iterators
        let X_Y_vector = vec![X, Y];
        let should_be_X_times_Y: Scalar = X_Y_vector.iter().product();
        assert_eq!(should_be_X_times_Y, X_TIMES_Y);

        // Test that product works for the empty iterator
        let one = Scalar::one();
        let empty_vector = vec![];
        let should_be_one: Scalar = empty_vector.iter().product();
        assert_eq!(should_be_one, one);
    }

    #[test]
    fn impl_sum() {
        // Test that sum works for non-empty iterators
        let two = Scalar::from(2u64);
        let one_vector = vec![Scalar::one(), Scalar::one()];
        let should_be_two: Scalar = one_vector.iter().sum();
        assert_eq!(should_be_two, two);

        // Test that sum works for the empty iterator
        let zero = Scalar::zero();
        let empty_vector = vec![];
        let should_be_zero: Scalar = empty_vector.iter().sum();
        assert_eq!(should_be_zero, zero);
    }

    #[test]
    fn square() {
        let expected = &X * &X;
        let actual = X.unpack().square().pack();
        for i in 0..32 {
            assert!(expected[i] == actual[i]);
        }
    }

    #[test]
    fn reduce() {
        let biggest = Scalar::from_bytes_mod_order([0xff; 32]);
        // 2^256 - 1 mod l, computed with an independent implementation
        let biggest_reduced = Scalar {
            bytes: [
                0x1c, 0x95, 0x98, 0x8d, 0x74, 0x31, 0xec, 0xd6, 0x70, 0xcf, 0x7d, 0x73, 0xf4,
                0x5b, 0xef, 0xc6, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                0xff, 0xff, 0xff, 0xff, 0xff, 0x0f,
            ],
        };
        assert_eq!(biggest, biggest_reduced);
        assert!(biggest.is_canonical());
    }

    #[test]
    fn from_bytes_mod_order_wide() {
        let mut bignum = [0u8; 64];
        // set bignum = x + 2^256x
        for i in 0..32 {
            bignum[i] = X[i];
            bignum[32 + i] = X[i];
        }
        // 3958878930004874126169954872055634648693766179881526445624823978500314864344
        // = x + 2^256x (mod l)
        let reduced = Scalar {
            bytes: [
                216, 154, 179, 139, 210, 121, 2, 71, 69, 99, 158, 216, 23, 173, 63, 100, 204, 0,
                91, 50, 219, 153, 57, 249, 28, 82, 31, 197, 100, 165, 192, 8,
            ],
        };
        let test_red = Scalar::from_bytes_mod_order_wide(&bignum);
        for i in 0..32 {
            assert!(test_red[i] == reduced[i]);
        }
    }

    #[allow(non_snake_case)]
    #[test]
    fn invert() {
        let inv_X = X.invert();
        assert_eq!(inv_X, XINV);
        let should_be_one = &inv_X * &X;
        assert_eq!(should_be_one, Scalar::one());
    }

    // Negating a scalar twice should result in the original scalar.
    #[allow(non_snake_case)]
    #[test]
    fn neg_twice_is_identity() {
        let negative_X = -&X;
        let should_be_X = -&negative_X;

        assert_eq!(should_be_X, X);
    }

    #[test]
    fn to_bytes_from_bytes_roundtrips() {
        let unpacked = X.unpack();
        let bytes = unpacked.to_bytes();
        let should_be_unpacked = UnpackedScalar::from_bytes(&bytes);

        assert_eq!(should_be_unpacked.0, unpacked.0);
    }

    #[test]
    fn montgomery_reduce_matches_from_bytes_mod_order_wide() {
        let mut bignum = [0u8; 64];

        // set bignum = x + 2^256x
        for i in 0..32 {
            bignum[i] = X[i];
            bignum[32 + i] = X[i];
        }
        // x + 2^256x (mod l)
        //         = 3958878930004874126169954872055634648693766179881526445624823978500314864344
        let expected = Scalar {
            bytes: [
                216, 154, 179, 139, 210, 121, 2, 71, 69, 99, 158, 216, 23, 173, 63, 100, 204, 0,
                91, 50, 219, 153, 57, 249, 28, 82, 31, 197, 100, 165, 192, 8,
            ],
        };
        let reduced = Scalar::from_bytes_mod_order_wide(&bignum);

        // The reduced scalar should match the expected
        assert_eq!(reduced.bytes, expected.bytes);
    }

    #[test]
    fn canonical_decoding() {
        // canonical encoding of 1667457891
        let canonical_bytes = [
            99, 99, 99, 99, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0,
        ];

        // encoding of
        //   7265385991361016183439748078976496179028704920197054998554201349516117938192
        // = 28380414028753969466561515933501938171588560817147392552250411230663687203
        //   (mod l)
        // non_canonical because unreduced mod l
        let non_canonical_bytes_because_unreduced = [16; 32];

        // encoding with high bit set, to check that the parser isn't pre-masking the high bit
        let non_canonical_bytes_because_highbit = [
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 128,
        ];

        assert!(Scalar::from_canonical_bytes(canonical_bytes).is_ok());
        assert_eq!(
            Scalar::from_canonical_bytes(non_canonical_bytes_because_unreduced),
            Err(DecodingError::InvalidEncoding)
        );
        assert_eq!(
            Scalar::from_canonical_bytes(non_canonical_bytes_because_highbit),
            Err(DecodingError::InvalidRepresentation)
        );
        // from_bits masks the high bit instead
        assert_eq!(
            Scalar::from_bits(non_canonical_bytes_because_highbit),
            Scalar::zero()
        );
    }

    /// The scalar arithmetic of an Ed25519 signature, checked against
    /// RFC 8032 test vector 1 (empty message).
    #[test]
    fn signature_scalars_match_rfc8032_tv1() {
        // SHA-512(prefix || M): the input to the nonce reduction
        let r_input: [u8; 64] = hex_to_64(
            "b6b19cd8e0426f5983fa112d89a143aa97dab8bc5deb8d5b6253c928b65272f4\
             044098c2a990039cde5b6a4818df0bfb6e40dc5dee54248032962323e701352d",
        );
        // SHA-512(R || A || M): the input to the challenge reduction
        let h_input: [u8; 64] = hex_to_64(
            "2771062b6b536fe7ffbdda0320c3827b035df10d284df3f08222f04dbca7a4c2\
             0ef15bdc988a22c7207411377c33f2ac09b1e86a046234283768ee7ba03c0e9f",
        );
        // the clamped secret scalar
        let a = Scalar::from_bits([
            0x30, 0x7c, 0x83, 0x86, 0x4f, 0x28, 0x33, 0xcb, 0x42, 0x7a, 0x2e, 0xf1, 0xc0, 0x0a,
            0x01, 0x3c, 0xfd, 0xff, 0x27, 0x68, 0xd9, 0x80, 0xc0, 0xa3, 0xa5, 0x20, 0xf0, 0x06,
            0x90, 0x4d, 0xe9, 0x4f,
        ]);

        let r = Scalar::from_bytes_mod_order_wide(&r_input);
        let expected_r = [
            0xf3, 0x89, 0x07, 0x30, 0x8c, 0x89, 0x3d, 0xea, 0xf2, 0x44, 0x78, 0x7d, 0xb4, 0xaf,
            0x53, 0x68, 0x22, 0x49, 0x10, 0x74, 0x18, 0xaf, 0xc2, 0xed, 0xc5, 0x8f, 0x75, 0xac,
            0x58, 0xa0, 0x74, 0x04,
        ];
        assert_eq!(r.to_bytes(), expected_r);

        let h = Scalar::from_bytes_mod_order_wide(&h_input);
        // s = h*a + r is the second half of the published signature
        let s = Scalar::multiply_add(&h, &a, &r);
        let expected_s = [
            0x5f, 0xb8, 0x82, 0x15, 0x90, 0xa3, 0x3b, 0xac, 0xc6, 0x1e, 0x39, 0x70, 0x1c, 0xf9,
            0xb4, 0x6b, 0xd2, 0x5b, 0xf5, 0xf0, 0x59, 0x5b, 0xbe, 0x24, 0x65, 0x51, 0x41, 0x43,
            0x8e, 0x7a, 0x10, 0x0b,
        ];
        assert_eq!(s.to_bytes(), expected_s);
    }

    fn hex_to_64(s: &str) -> [u8; 64] {
        let mut out = [0u8; 64];
        out.copy_from_slice(&hex::decode(s).unwrap());
        out
    }

    #[test]
    fn hash_from_bytes_matches_reference() {
        use sha2::Sha512;
        let s = Scalar::hash_from_bytes::<Sha512>(b"Hello, world!");
        assert_eq!(s.bytes, HASH_OF_HELLO_WORLD);
    }

    #[test]
    fn multiply_add_matches_operators() {
        let xy_plus_one = Scalar::multiply_add(&X, &Y, &Scalar::one());
        assert_eq!(xy_plus_one, &X_TIMES_Y + &Scalar::one());
        assert_eq!(xy_plus_one, &(&X * &Y) + &Scalar::one());
    }

    #[test]
    fn add_of_unreduced_scalars_reduces() {
        // from_bits values may exceed l; the operators must still land
        // on the canonical representative
        let big = Scalar::from_bits(LARGEST_CLAMPED_INTEGER);
        let sum = &big + &big;
        assert!(sum.is_canonical());
        assert_eq!(sum, &big.reduce() + &big.reduce());
        let diff = &big - &big;
        assert_eq!(diff, Scalar::zero());
    }

    #[test]
    fn to_radix_16_reconstructs() {
        for s in [X, Y, XINV, Scalar::from_bits(LARGEST_CLAMPED_INTEGER)].iter() {
            let digits = s.to_radix_16();
            for i in 0..63 {
                assert!(-8 <= digits[i] && digits[i] < 8);
            }
            assert!(-8 <= digits[63] && digits[63] <= 8);

            // Horner evaluation of sum(digits[i] 16^i) mod l
            let sixteen = Scalar::from(16u8);
            let mut recons = Scalar::zero();
            for i in (0..64).rev() {
                recons = &(&recons * &sixteen)
                    + &(if digits[i] >= 0 {
                        Scalar::from(digits[i] as u8)
                    } else {
                        -&Scalar::from((-digits[i]) as u8)
                    });
            }
            assert_eq!(&recons, &s.reduce());
        }
    }

    #[test]
    fn batch_invert_matches_nonbatched() {
        let mut scalars = [
            Scalar::from(3u64),
            Scalar::from(5u64),
            Scalar::from(7u64),
            Scalar::from(11u64),
        ];

        let allinv = Scalar::batch_invert(&mut scalars);

        assert_eq!(allinv, Scalar::from(3 * 5 * 7 * 11u64).invert());
        assert_eq!(scalars[0], Scalar::from(3u64).invert());
        assert_eq!(scalars[1], Scalar::from(5u64).invert());
        assert_eq!(scalars[2], Scalar::from(7u64).invert());
        assert_eq!(scalars[3], Scalar::from(11u64).invert());
    }
}
