//! This module contains backend-specific constant values, such as the
//! 32-bit limbs of curve constants.

use super::field::FieldElement2625;
use super::scalar::Scalar29;
use crate::edwards::EdwardsPoint;

/// Edwards `d` value, equal to `-121665/121666 mod p`.
pub(crate) const EDWARDS_D: FieldElement2625 = FieldElement2625::from_limbs([
    -10913610, 13857413, -15372611, 6949391, 114729, -8787816, -6275908, -3247719, -18696448,
    -12055116,
]);

/// Edwards `2*d` value, equal to `2*(-121665/121666) mod p`.
pub(crate) const EDWARDS_D2: FieldElement2625 = FieldElement2625::from_limbs([
    -21827239, -5839606, -30745221, 13898782, 229458, 15978800, -12551817, -6495438, 29715968,
    9444199,
]);

/// Precomputed value of one of the square roots of -1 (mod p).
pub(crate) const SQRT_M1: FieldElement2625 = FieldElement2625::from_limbs([
    -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
    11406482,
]);

/// `= 1/sqrt(a-d)`, where `a = -1 (mod p)`, `d` are the Edwards curve
/// parameters.
pub(crate) const INVSQRT_A_MINUS_D: FieldElement2625 = FieldElement2625::from_limbs([
    6111485, 4156064, -27798727, 12243468, -25904040, 120897, 20826367, -7060776, 6093568,
    -1986012,
]);

/// `= sqrt(a*d - 1)`, where `a = -1 (mod p)`, `d` are the Edwards curve
/// parameters.
pub(crate) const SQRT_AD_MINUS_ONE: FieldElement2625 = FieldElement2625::from_limbs([
    24849947, -153582, -23613485, 6347715, -21072328, -667138, -25271143, -15367704, -870347,
    14525639,
]);

/// One minus edwards `d` value squared, equal to
/// `(1 - (-121665/121666) mod p) pow 2`.
pub(crate) const ONE_MINUS_EDWARDS_D_SQUARED: FieldElement2625 = FieldElement2625::from_limbs([
    6275446, -16617371, -22938544, -3773710, 11667077, 7397348, -27922721, 1766195, -24433858,
    672203,
]);

/// Edwards `d` value minus one squared, equal to
/// `(((-121665/121666) mod p) - 1) pow 2`.
pub(crate) const EDWARDS_D_MINUS_ONE_SQUARED: FieldElement2625 = FieldElement2625::from_limbs([
    15551795, -11097455, -13425098, -10125071, -11896535, 10178284, -26634327, 4729244, -5282110,
    -10116402,
]);

/// The Ed25519 basepoint, as an `EdwardsPoint`.
///
/// This is kept in the backend because it's the only base for the
/// backend-specific limb encodings of its coordinates.
pub const ED25519_BASEPOINT_POINT: EdwardsPoint = EdwardsPoint {
    X: FieldElement2625::from_limbs([
        -14297830, -7645148, 16144683, -16471763, 27570974, -2696100, -26142465, 8378389,
        20764389, 8758491,
    ]),
    Y: FieldElement2625::from_limbs([
        -26843541, -6710886, 13421773, -13421773, 26843546, 6710886, -13421773, 13421773,
        -26843546, -6710886,
    ]),
    Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    T: FieldElement2625::from_limbs([
        28827062, -6116119, -27349572, 244363, 8635006, 11264893, 19351346, 13413597, 16611511,
        -6414980,
    ]),
};

/// `L` is the order of base point, i.e. \\(2\^{252} +
/// 27742317777372353535851937790883648493\\), in 29-bit limbs.
pub(crate) const L: Scalar29 = Scalar29([
    0x1cf5d3ed, 0x009318d2, 0x1de73596, 0x1df3bd45, 0x0000014d, 0x00000000, 0x00000000,
    0x00000000, 0x00100000,
]);

/// `L` * `LFACTOR` = -1 (mod 2^29)
pub(crate) const LFACTOR: u32 = 0x12547e1b;

/// `R` = R % L where R = 2^261
pub(crate) const R: Scalar29 = Scalar29([
    0x114df9ed, 0x1a617303, 0x0f7c098c, 0x16793167, 0x1ffd656e, 0x1fffffff, 0x1fffffff,
    0x1fffffff, 0x000fffff,
]);

/// `RR` = (R^2) % L where R = 2^261
pub(crate) const RR: Scalar29 = Scalar29([
    0x0b5f9d12, 0x1e141b17, 0x158d7f3d, 0x143f3757, 0x1972d781, 0x042feb7c, 0x1ceec73d,
    0x1e184d1e, 0x0005046d,
]);

/// The 8-torsion subgroup \\(\mathcal E \[8\]\\).
///
/// In the case of Curve25519, it is cyclic; the `i`-th element of the
/// array is \\(\[i\]P\\), where \\(P\\) is a point of order \\(8\\)
/// generating \\(\mathcal E\[8\]\\).
///
/// Thus \\(\mathcal E\[4\]\\) is the points indexed by `0,2,4,6`, and
/// \\(\mathcal E\[2\]\\) is the points indexed by `0,4`.
pub const EIGHT_TORSION: [EdwardsPoint; 8] = [
    EdwardsPoint {
        X: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Y: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([
            21352778, 5345713, 4660180, -8347857, 24143090, 14568123, 30185756, -12247770,
            -33528939, 8345319,
        ]),
        Y: FieldElement2625::from_limbs([
            -6952922, -1265500, 6862341, -7057498, -4037696, -5447722, 31680899, -15325402,
            -19365852, 1569102,
        ]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([
            25262188, 11972680, -11716002, 5869612, 18193162, -16297739, -20670665, 8559098,
            -3541543, 5011181,
        ]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([
            -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654,
            326686, 11406482,
        ]),
        Y: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([
            21352778, 5345713, 4660180, -8347857, 24143090, 14568123, 30185756, -12247770,
            -33528939, 8345319,
        ]),
        Y: FieldElement2625::from_limbs([
            6952922, 1265500, -6862341, 7057498, 4037696, 5447722, -31680899, 15325402,
            19365852, -1569102,
        ]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([
            -25262188, -11972680, 11716002, -5869612, -18193162, 16297739, 20670665, -8559098,
            3541543, -5011181,
        ]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Y: FieldElement2625::from_limbs([-1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([
            -21352778, -5345713, -4660180, 8347857, -24143090, -14568123, -30185756, 12247770,
            33528939, -8345319,
        ]),
        Y: FieldElement2625::from_limbs([
            6952922, 1265500, -6862341, 7057498, 4037696, 5447722, -31680899, 15325402,
            19365852, -1569102,
        ]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([
            25262188, 11972680, -11716002, 5869612, 18193162, -16297739, -20670665, 8559098,
            -3541543, 5011181,
        ]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([
            32595792, 7943725, -9377950, -3500415, -12389472, 272473, 25146209, 2005654,
            -326686, -11406482,
        ]),
        Y: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([
            -21352778, -5345713, -4660180, 8347857, -24143090, -14568123, -30185756, 12247770,
            33528939, -8345319,
        ]),
        Y: FieldElement2625::from_limbs([
            -6952922, -1265500, 6862341, -7057498, -4037696, -5447722, 31680899, -15325402,
            -19365852, 1569102,
        ]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([
            -25262188, -11972680, 11716002, -5869612, -18193162, 16297739, 20670665, -8559098,
            3541543, -5011181,
        ]),
    },
];
