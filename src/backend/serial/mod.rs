//! Serial (non-vectorized) implementations of field, scalar, and point
//! arithmetic.

pub mod u32;

pub mod scalar_mul;
