//! Field arithmetic modulo \\(p = 2\^{255} - 19\\), using ten signed
//! 32-bit limbs with 64-bit products.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

use zeroize::Zeroize;

/// A `FieldElement2625` represents an element of the field
/// \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// In the 32-bit implementation, a `FieldElement` is represented in
/// radix \\(2\^{25.5}\\) as ten signed limbs `t[0], ..., t[9]`, alternating
/// between 26 and 25 bits of the value, so that
/// $$
///     t = t_0 + t_1 2^{26} + t_2 2^{51} + t_3 2^{77} + t_4 2^{102}
///          + t_5 2^{128} + t_6 2^{153} + t_7 2^{179} + t_8 2^{204}
///          + t_9 2^{230}.
/// $$
///
/// The limbs are *unbounded* signed integers in general; functions
/// document the bounds they require and produce.  The output of a
/// multiplication, squaring, or `reduce` is *reasonably reduced*:
/// \\( |t_{even}| < 1.01 \cdot 2^{25} \\) and
/// \\( |t_{odd}| < 1.01 \cdot 2^{24} \\).
///
/// The representation of a field element is not canonical: equality must
/// go through `to_bytes`, never through the limbs.
#[derive(Copy, Clone)]
pub struct FieldElement2625(pub(crate) [i32; 10]);

impl Debug for FieldElement2625 {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "FieldElement2625({:?})", &self.0[..])
    }
}

impl Zeroize for FieldElement2625 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl ConditionallySelectable for FieldElement2625 {
    fn conditional_select(
        a: &FieldElement2625,
        b: &FieldElement2625,
        choice: Choice,
    ) -> FieldElement2625 {
        let mut limbs = [0i32; 10];
        for i in 0..10 {
            limbs[i] = i32::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement2625(limbs)
    }

    fn conditional_assign(&mut self, other: &FieldElement2625, choice: Choice) {
        for i in 0..10 {
            self.0[i].conditional_assign(&other.0[i], choice);
        }
    }

    fn conditional_swap(a: &mut FieldElement2625, b: &mut FieldElement2625, choice: Choice) {
        for i in 0..10 {
            i32::conditional_swap(&mut a.0[i], &mut b.0[i], choice);
        }
    }
}

/// Load a 24-bit little-endian chunk.
#[inline(always)]
fn load_3(input: &[u8]) -> i64 {
    (input[0] as i64) | ((input[1] as i64) << 8) | ((input[2] as i64) << 16)
}

/// Load a 32-bit little-endian chunk.
#[inline(always)]
fn load_4(input: &[u8]) -> i64 {
    (input[0] as i64)
        | ((input[1] as i64) << 8)
        | ((input[2] as i64) << 16)
        | ((input[3] as i64) << 24)
}

/// Widening multiply of two limbs.
#[inline(always)]
fn m(x: i32, y: i32) -> i64 {
    (x as i64) * (y as i64)
}

impl<'b> AddAssign<&'b FieldElement2625> for FieldElement2625 {
    fn add_assign(&mut self, rhs: &'b FieldElement2625) {
        for i in 0..10 {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<'a, 'b> Add<&'b FieldElement2625> for &'a FieldElement2625 {
    type Output = FieldElement2625;
    /// Limb-wise addition.  Each output limb grows by at most one bit
    /// relative to the larger input; feed the result through a
    /// multiplication or `reduce` before the bounds run out.
    fn add(self, rhs: &'b FieldElement2625) -> FieldElement2625 {
        let mut output = *self;
        output += rhs;
        output
    }
}

impl<'b> SubAssign<&'b FieldElement2625> for FieldElement2625 {
    fn sub_assign(&mut self, rhs: &'b FieldElement2625) {
        for i in 0..10 {
            self.0[i] -= rhs.0[i];
        }
    }
}

impl<'a, 'b> Sub<&'b FieldElement2625> for &'a FieldElement2625 {
    type Output = FieldElement2625;
    /// Limb-wise subtraction; the signed representation makes this exact
    /// with no pre-conditioning.
    fn sub(self, rhs: &'b FieldElement2625) -> FieldElement2625 {
        let mut output = *self;
        output -= rhs;
        output
    }
}

impl<'a> Neg for &'a FieldElement2625 {
    type Output = FieldElement2625;
    fn neg(self) -> FieldElement2625 {
        let mut limbs = [0i32; 10];
        for i in 0..10 {
            limbs[i] = -self.0[i];
        }
        FieldElement2625(limbs)
    }
}

impl Neg for FieldElement2625 {
    type Output = FieldElement2625;
    fn neg(self) -> FieldElement2625 {
        -&self
    }
}

impl<'b> MulAssign<&'b FieldElement2625> for FieldElement2625 {
    fn mul_assign(&mut self, rhs: &'b FieldElement2625) {
        let result = (self as &FieldElement2625) * rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Mul<&'b FieldElement2625> for &'a FieldElement2625 {
    type Output = FieldElement2625;
    fn mul(self, rhs: &'b FieldElement2625) -> FieldElement2625 {
        // Schoolbook 10x10 product accumulated into ten 64-bit lanes.
        //
        // An off-diagonal term f_i g_j with i + j >= 10 wraps past
        // 2^255 and so picks up a factor of 19; a term where both
        // operands sit at odd (25-bit) positions has lost a factor of
        // two to the radix and must be doubled.  Premultiplying the g
        // limbs by 19 and the odd f limbs by 2 keeps every interior
        // product a single 32x32 -> 64-bit multiply.
        //
        // The inputs must be reasonably reduced up to a factor of
        // ~1.65, which holds for outputs of mul/square/reduce and for
        // single sums or differences of such outputs.
        let f = &self.0;
        let g = &rhs.0;

        let g1_19 = 19 * g[1];
        let g2_19 = 19 * g[2];
        let g3_19 = 19 * g[3];
        let g4_19 = 19 * g[4];
        let g5_19 = 19 * g[5];
        let g6_19 = 19 * g[6];
        let g7_19 = 19 * g[7];
        let g8_19 = 19 * g[8];
        let g9_19 = 19 * g[9];

        let f1_2 = 2 * f[1];
        let f3_2 = 2 * f[3];
        let f5_2 = 2 * f[5];
        let f7_2 = 2 * f[7];
        let f9_2 = 2 * f[9];

        let h0 = m(f[0], g[0]) + m(f1_2, g9_19) + m(f[2], g8_19) + m(f3_2, g7_19)
               + m(f[4], g6_19) + m(f5_2, g5_19) + m(f[6], g4_19) + m(f7_2, g3_19)
               + m(f[8], g2_19) + m(f9_2, g1_19);
        let h1 = m(f[0], g[1]) + m(f[1], g[0]) + m(f[2], g9_19) + m(f[3], g8_19)
               + m(f[4], g7_19) + m(f[5], g6_19) + m(f[6], g5_19) + m(f[7], g4_19)
               + m(f[8], g3_19) + m(f[9], g2_19);
        let h2 = m(f[0], g[2]) + m(f1_2, g[1]) + m(f[2], g[0]) + m(f3_2, g9_19)
               + m(f[4], g8_19) + m(f5_2, g7_19) + m(f[6], g6_19) + m(f7_2, g5_19)
               + m(f[8], g4_19) + m(f9_2, g3_19);
        let h3 = m(f[0], g[3]) + m(f[1], g[2]) + m(f[2], g[1]) + m(f[3], g[0])
               + m(f[4], g9_19) + m(f[5], g8_19) + m(f[6], g7_19) + m(f[7], g6_19)
               + m(f[8], g5_19) + m(f[9], g4_19);
        let h4 = m(f[0], g[4]) + m(f1_2, g[3]) + m(f[2], g[2]) + m(f3_2, g[1])
               + m(f[4], g[0]) + m(f5_2, g9_19) + m(f[6], g8_19) + m(f7_2, g7_19)
               + m(f[8], g6_19) + m(f9_2, g5_19);
        let h5 = m(f[0], g[5]) + m(f[1], g[4]) + m(f[2], g[3]) + m(f[3], g[2])
               + m(f[4], g[1]) + m(f[5], g[0]) + m(f[6], g9_19) + m(f[7], g8_19)
               + m(f[8], g7_19) + m(f[9], g6_19);
        let h6 = m(f[0], g[6]) + m(f1_2, g[5]) + m(f[2], g[4]) + m(f3_2, g[3])
               + m(f[4], g[2]) + m(f5_2, g[1]) + m(f[6], g[0]) + m(f7_2, g9_19)
               + m(f[8], g8_19) + m(f9_2, g7_19);
        let h7 = m(f[0], g[7]) + m(f[1], g[6]) + m(f[2], g[5]) + m(f[3], g[4])
               + m(f[4], g[3]) + m(f[5], g[2]) + m(f[6], g[1]) + m(f[7], g[0])
               + m(f[8], g9_19) + m(f[9], g8_19);
        let h8 = m(f[0], g[8]) + m(f1_2, g[7]) + m(f[2], g[6]) + m(f3_2, g[5])
               + m(f[4], g[4]) + m(f5_2, g[3]) + m(f[6], g[2]) + m(f7_2, g[1])
               + m(f[8], g[0]) + m(f9_2, g9_19);
        let h9 = m(f[0], g[9]) + m(f[1], g[8]) + m(f[2], g[7]) + m(f[3], g[6])
               + m(f[4], g[5]) + m(f[5], g[4]) + m(f[6], g[3]) + m(f[7], g[2])
               + m(f[8], g[1]) + m(f[9], g[0]);

        FieldElement2625::reduce([h0, h1, h2, h3, h4, h5, h6, h7, h8, h9])
    }
}

impl FieldElement2625 {
    /// Construct a field element from its ten-limb representation.
    ///
    /// Used for hardcoded constants; the limbs must already satisfy the
    /// reasonably-reduced bounds.
    pub(crate) const fn from_limbs(limbs: [i32; 10]) -> FieldElement2625 {
        FieldElement2625(limbs)
    }

    /// The additive identity.
    pub fn zero() -> FieldElement2625 {
        FieldElement2625([0; 10])
    }

    /// The multiplicative identity.
    pub fn one() -> FieldElement2625 {
        FieldElement2625([1, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    }

    /// The value \\(-1 \pmod p\\).
    pub fn minus_one() -> FieldElement2625 {
        FieldElement2625([-1, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    }

    /// Carry-propagate ten 64-bit lanes into a reasonably reduced
    /// element.
    ///
    /// The carry chain runs over the two halves of the limb array in
    /// parallel, twice, then folds the top carry back into `h0` with a
    /// factor of 19 (since \\(2^{255} \equiv 19\\)) and settles `h0` once
    /// more.  Output limbs fit in signed 26/25 bits with excess below
    /// 0.007.
    fn reduce(mut h: [i64; 10]) -> FieldElement2625 {
        let carry0 = (h[0] + (1 << 25)) >> 26; h[1] += carry0; h[0] -= carry0 << 26;
        let carry4 = (h[4] + (1 << 25)) >> 26; h[5] += carry4; h[4] -= carry4 << 26;
        let carry1 = (h[1] + (1 << 24)) >> 25; h[2] += carry1; h[1] -= carry1 << 25;
        let carry5 = (h[5] + (1 << 24)) >> 25; h[6] += carry5; h[5] -= carry5 << 25;
        let carry2 = (h[2] + (1 << 25)) >> 26; h[3] += carry2; h[2] -= carry2 << 26;
        let carry6 = (h[6] + (1 << 25)) >> 26; h[7] += carry6; h[6] -= carry6 << 26;
        let carry3 = (h[3] + (1 << 24)) >> 25; h[4] += carry3; h[3] -= carry3 << 25;
        let carry7 = (h[7] + (1 << 24)) >> 25; h[8] += carry7; h[7] -= carry7 << 25;
        let carry4 = (h[4] + (1 << 25)) >> 26; h[5] += carry4; h[4] -= carry4 << 26;
        let carry8 = (h[8] + (1 << 25)) >> 26; h[9] += carry8; h[8] -= carry8 << 26;
        let carry9 = (h[9] + (1 << 24)) >> 25; h[0] += carry9 * 19; h[9] -= carry9 << 25;
        let carry0 = (h[0] + (1 << 25)) >> 26; h[1] += carry0; h[0] -= carry0 << 26;

        let mut limbs = [0i32; 10];
        for i in 0..10 {
            limbs[i] = h[i] as i32;
        }
        FieldElement2625(limbs)
    }

    /// Load a `FieldElement2625` from the low 255 bits of a 32-byte
    /// input.
    ///
    /// # Warning
    ///
    /// This function does not check that the input used the canonical
    /// representative.  It masks the high bit, but it will deserialize
    /// 2^255 - 18 as -1.  If the input is non-canonical, the
    /// deserialized value will differ from the original by a multiple
    /// of p.
    pub fn from_bytes(data: &[u8; 32]) -> FieldElement2625 {
        let mut h = [0i64; 10];
        h[0] = load_4(&data[0..]);
        h[1] = load_3(&data[4..]) << 6;
        h[2] = load_3(&data[7..]) << 5;
        h[3] = load_3(&data[10..]) << 3;
        h[4] = load_3(&data[13..]) << 2;
        h[5] = load_4(&data[16..]);
        h[6] = load_3(&data[20..]) << 7;
        h[7] = load_3(&data[23..]) << 5;
        h[8] = load_3(&data[26..]) << 4;
        h[9] = (load_3(&data[29..]) & 8388607) << 2;

        let carry9 = (h[9] + (1 << 24)) >> 25; h[0] += carry9 * 19; h[9] -= carry9 << 25;
        let carry1 = (h[1] + (1 << 24)) >> 25; h[2] += carry1; h[1] -= carry1 << 25;
        let carry3 = (h[3] + (1 << 24)) >> 25; h[4] += carry3; h[3] -= carry3 << 25;
        let carry5 = (h[5] + (1 << 24)) >> 25; h[6] += carry5; h[5] -= carry5 << 25;
        let carry7 = (h[7] + (1 << 24)) >> 25; h[8] += carry7; h[7] -= carry7 << 25;

        let carry0 = (h[0] + (1 << 25)) >> 26; h[1] += carry0; h[0] -= carry0 << 26;
        let carry2 = (h[2] + (1 << 25)) >> 26; h[3] += carry2; h[2] -= carry2 << 26;
        let carry4 = (h[4] + (1 << 25)) >> 26; h[5] += carry4; h[4] -= carry4 << 26;
        let carry6 = (h[6] + (1 << 25)) >> 26; h[7] += carry6; h[6] -= carry6 << 26;
        let carry8 = (h[8] + (1 << 25)) >> 26; h[9] += carry8; h[8] -= carry8 << 26;

        let mut limbs = [0i32; 10];
        for i in 0..10 {
            limbs[i] = h[i] as i32;
        }
        FieldElement2625(limbs)
    }

    /// Serialize this `FieldElement2625` to the canonical 32-byte
    /// little-endian encoding of the unique representative in
    /// \\([0, p)\\).
    pub fn to_bytes(&self) -> [u8; 32] {
        // Settle the limbs first so the quotient estimate below sees
        // reasonably reduced input.
        let mut h = [0i64; 10];
        for i in 0..10 {
            h[i] = self.0[i] as i64;
        }
        let reduced = FieldElement2625::reduce(h);
        let mut h = [0i64; 10];
        for i in 0..10 {
            h[i] = reduced.0[i] as i64;
        }

        // Compute q = floor(h / p) by a chained-shift accumulation of
        // h + 19 * 2^-25 h_9 + 1/2, then subtract q*p as h + 19q with
        // the 255th bit masked off during packing.  q is 0 or 1.
        let mut q = (19 * h[9] + (1 << 24)) >> 25;
        q = (h[0] + q) >> 26;
        q = (h[1] + q) >> 25;
        q = (h[2] + q) >> 26;
        q = (h[3] + q) >> 25;
        q = (h[4] + q) >> 26;
        q = (h[5] + q) >> 25;
        q = (h[6] + q) >> 26;
        q = (h[7] + q) >> 25;
        q = (h[8] + q) >> 26;
        q = (h[9] + q) >> 25;

        h[0] += 19 * q;

        let carry0 = h[0] >> 26; h[1] += carry0; h[0] -= carry0 << 26;
        let carry1 = h[1] >> 25; h[2] += carry1; h[1] -= carry1 << 25;
        let carry2 = h[2] >> 26; h[3] += carry2; h[2] -= carry2 << 26;
        let carry3 = h[3] >> 25; h[4] += carry3; h[3] -= carry3 << 25;
        let carry4 = h[4] >> 26; h[5] += carry4; h[4] -= carry4 << 26;
        let carry5 = h[5] >> 25; h[6] += carry5; h[5] -= carry5 << 25;
        let carry6 = h[6] >> 26; h[7] += carry6; h[6] -= carry6 << 26;
        let carry7 = h[7] >> 25; h[8] += carry7; h[7] -= carry7 << 25;
        let carry8 = h[8] >> 26; h[9] += carry8; h[8] -= carry8 << 26;
        let carry9 = h[9] >> 25;                 h[9] -= carry9 << 25;

        let mut s = [0u8; 32];
        s[0] = h[0] as u8;
        s[1] = (h[0] >> 8) as u8;
        s[2] = (h[0] >> 16) as u8;
        s[3] = ((h[0] >> 24) | (h[1] << 2)) as u8;
        s[4] = (h[1] >> 6) as u8;
        s[5] = (h[1] >> 14) as u8;
        s[6] = ((h[1] >> 22) | (h[2] << 3)) as u8;
        s[7] = (h[2] >> 5) as u8;
        s[8] = (h[2] >> 13) as u8;
        s[9] = ((h[2] >> 21) | (h[3] << 5)) as u8;
        s[10] = (h[3] >> 3) as u8;
        s[11] = (h[3] >> 11) as u8;
        s[12] = ((h[3] >> 19) | (h[4] << 6)) as u8;
        s[13] = (h[4] >> 2) as u8;
        s[14] = (h[4] >> 10) as u8;
        s[15] = (h[4] >> 18) as u8;
        s[16] = h[5] as u8;
        s[17] = (h[5] >> 8) as u8;
        s[18] = (h[5] >> 16) as u8;
        s[19] = ((h[5] >> 24) | (h[6] << 1)) as u8;
        s[20] = (h[6] >> 7) as u8;
        s[21] = (h[6] >> 15) as u8;
        s[22] = ((h[6] >> 23) | (h[7] << 3)) as u8;
        s[23] = (h[7] >> 5) as u8;
        s[24] = (h[7] >> 13) as u8;
        s[25] = ((h[7] >> 21) | (h[8] << 4)) as u8;
        s[26] = (h[8] >> 4) as u8;
        s[27] = (h[8] >> 12) as u8;
        s[28] = ((h[8] >> 20) | (h[9] << 6)) as u8;
        s[29] = (h[9] >> 2) as u8;
        s[30] = (h[9] >> 10) as u8;
        s[31] = (h[9] >> 18) as u8;

        // The high bit was masked by the carry chain above.
        debug_assert!(s[31] & 0b1000_0000 == 0u8);

        s
    }

    /// 64-bit product lanes of the square of this element, shared by
    /// `square` and `square2`.
    fn square_inner(&self) -> [i64; 10] {
        let f = &self.0;

        let f0_2 = 2 * f[0];
        let f1_2 = 2 * f[1];
        let f2_2 = 2 * f[2];
        let f3_2 = 2 * f[3];
        let f4_2 = 2 * f[4];
        let f5_2 = 2 * f[5];
        let f6_2 = 2 * f[6];
        let f7_2 = 2 * f[7];
        let f5_38 = 38 * f[5];
        let f6_19 = 19 * f[6];
        let f7_38 = 38 * f[7];
        let f8_19 = 19 * f[8];
        let f9_38 = 38 * f[9];

        let mut h = [0i64; 10];
        h[0] = m(f[0], f[0]) + m(f1_2, f9_38) + m(f2_2, f8_19) + m(f3_2, f7_38)
             + m(f4_2, f6_19) + m(f[5], f5_38);
        h[1] = m(f0_2, f[1]) + m(f[2], f9_38) + m(f3_2, f8_19) + m(f[4], f7_38)
             + m(f5_2, f6_19);
        h[2] = m(f0_2, f[2]) + m(f1_2, f[1]) + m(f3_2, f9_38) + m(f4_2, f8_19)
             + m(f5_2, f7_38) + m(f[6], f6_19);
        h[3] = m(f0_2, f[3]) + m(f1_2, f[2]) + m(f[4], f9_38) + m(f5_2, f8_19)
             + m(f[6], f7_38);
        h[4] = m(f0_2, f[4]) + m(f1_2, f3_2) + m(f[2], f[2]) + m(f5_2, f9_38)
             + m(f6_2, f8_19) + m(f[7], f7_38);
        h[5] = m(f0_2, f[5]) + m(f1_2, f[4]) + m(f2_2, f[3]) + m(f[6], f9_38)
             + m(f7_2, f8_19);
        h[6] = m(f0_2, f[6]) + m(f1_2, f5_2) + m(f2_2, f[4]) + m(f3_2, f[3])
             + m(f7_2, f9_38) + m(f[8], f8_19);
        h[7] = m(f0_2, f[7]) + m(f1_2, f[6]) + m(f2_2, f[5]) + m(f3_2, f[4])
             + m(f[8], f9_38);
        h[8] = m(f0_2, f[8]) + m(f1_2, f7_2) + m(f2_2, f[6]) + m(f3_2, f5_2)
             + m(f[4], f[4]) + m(f[9], f9_38);
        h[9] = m(f0_2, f[9]) + m(f1_2, f[8]) + m(f2_2, f[7]) + m(f3_2, f[6])
             + m(f4_2, f[5]);
        h
    }

    /// Compute `self^2`.
    pub fn square(&self) -> FieldElement2625 {
        FieldElement2625::reduce(self.square_inner())
    }

    /// Compute `2 * self^2`.
    pub fn square2(&self) -> FieldElement2625 {
        let mut h = self.square_inner();
        for lane in h.iter_mut() {
            *lane += *lane;
        }
        FieldElement2625::reduce(h)
    }

    /// Compute `self^(2^k)` by `k` successive squarings.  Requires
    /// `k > 0`.
    pub fn pow2k(&self, k: u32) -> FieldElement2625 {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Random element a of GF(2^255-19), from Sage.
    pub static A_BYTES: [u8; 32] = [
        0x38, 0xb4, 0xe6, 0x52, 0xe4, 0x4d, 0xa7, 0xf2, 0x37, 0x0d, 0x9e, 0x26, 0x0e, 0x27, 0x13,
        0x65, 0x50, 0xa4, 0xa3, 0xa6, 0xd0, 0x7f, 0x5c, 0x0c, 0x33, 0x2f, 0x8b, 0x12, 0x12, 0x84,
        0x1f, 0x69,
    ];

    /// Byte representation of a^2.
    static ASQ_BYTES: [u8; 32] = [
        0x9b, 0xdd, 0x9c, 0x28, 0xa9, 0x0e, 0xc0, 0x2b, 0x58, 0x31, 0x1f, 0xef, 0x2b, 0xb2, 0xfc,
        0x15, 0xb0, 0x12, 0x8d, 0xb2, 0xca, 0x0b, 0x11, 0x75, 0x11, 0x14, 0xa2, 0xf7, 0xb1, 0x4f,
        0x03, 0x24,
    ];

    #[test]
    fn a_mul_a_vs_a_squared_constant() {
        let a = FieldElement2625::from_bytes(&A_BYTES);
        let asq = FieldElement2625::from_bytes(&ASQ_BYTES);
        assert_eq!(asq.to_bytes(), (&a * &a).to_bytes());
    }

    #[test]
    fn a_square_vs_a_squared_constant() {
        let a = FieldElement2625::from_bytes(&A_BYTES);
        let asq = FieldElement2625::from_bytes(&ASQ_BYTES);
        assert_eq!(asq.to_bytes(), a.square().to_bytes());
    }

    #[test]
    fn a_square2_vs_a_squared_constant() {
        let a = FieldElement2625::from_bytes(&A_BYTES);
        let asq = FieldElement2625::from_bytes(&ASQ_BYTES);
        assert_eq!((&asq + &asq).to_bytes(), a.square2().to_bytes());
    }

    #[test]
    fn from_bytes_highbit_is_ignored() {
        let mut cleared_bytes = A_BYTES;
        cleared_bytes[31] &= 127u8;
        let with_highbit_set = FieldElement2625::from_bytes(&A_BYTES);
        let without_highbit_set = FieldElement2625::from_bytes(&cleared_bytes);
        assert_eq!(without_highbit_set.to_bytes(), with_highbit_set.to_bytes());
    }

    #[test]
    fn encoding_is_canonical() {
        // Encode 1 wrongly as 1 + (2^255 - 19) = 2^255 - 18
        let one_encoded_wrongly_bytes: [u8; 32] = [
            0xee, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0x7f,
        ];
        // Decode to a field element
        let one = FieldElement2625::from_bytes(&one_encoded_wrongly_bytes);
        // .. then check that the encoding is correct
        let one_bytes = one.to_bytes();
        assert_eq!(one_bytes[0], 1);
        for byte in &one_bytes[1..] {
            assert_eq!(*byte, 0);
        }
    }

    #[test]
    fn minus_one_encodes_as_p_minus_one() {
        let expected = {
            let mut b = [0xffu8; 32];
            b[0] = 0xec;
            b[31] = 0x7f;
            b
        };
        assert_eq!(FieldElement2625::minus_one().to_bytes(), expected);
        let zero = &FieldElement2625::one() + &FieldElement2625::minus_one();
        assert_eq!(zero.to_bytes(), FieldElement2625::zero().to_bytes());
    }

    #[test]
    fn conditional_negate() {
        use subtle::ConditionallyNegatable;
        let one = FieldElement2625::one();
        let minus_one = FieldElement2625::minus_one();
        let mut x = one;
        x.conditional_negate(Choice::from(1));
        assert_eq!(x.to_bytes(), minus_one.to_bytes());
        x.conditional_negate(Choice::from(0));
        assert_eq!(x.to_bytes(), minus_one.to_bytes());
        x.conditional_negate(Choice::from(1));
        assert_eq!(x.to_bytes(), one.to_bytes());
    }
}
