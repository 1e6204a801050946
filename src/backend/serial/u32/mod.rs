//! The `u32` backend: arithmetic using 32-bit limbs with 64-bit products.
//!
//! Field elements use ten signed limbs in radix \\(2^{25.5}\\); scalars use
//! nine 29-bit limbs with Montgomery multiplication.

pub mod constants;
pub mod field;
pub mod scalar;
