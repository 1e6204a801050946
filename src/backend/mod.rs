//! Pluggable implementations for different architectures.
//!
//! There is currently one backend, the `serial` backend, which contains a
//! portable 32-bit limb schedule for field and scalar arithmetic.

pub mod serial;
