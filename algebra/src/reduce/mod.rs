//! This module defines some traits for modular arithmetic.
//!
//! The modulus is always the receiver and is taken by value, so call sites read
//! `modulus.reduce_add(a, b)`.

mod ops;

pub use ops::*;
