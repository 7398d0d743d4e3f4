//! Defines the runtime modulus used by every ring and ciphertext.

use serde::{Deserialize, Serialize};

use crate::AlgebraError;

/// A modulus `m` with `2 <= m <= 2^32`.
///
/// The upper bound keeps every product of two reduced values inside `u64`
/// and every inner product of realistic length inside `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Modulus {
    value: u64,
}

impl Modulus {
    /// The largest supported modulus.
    pub const MAX: u64 = 1 << 32;

    /// Creates a new [`Modulus`].
    #[inline]
    pub fn new(value: u64) -> Result<Self, AlgebraError> {
        if (2..=Self::MAX).contains(&value) {
            Ok(Self { value })
        } else {
            Err(AlgebraError::InvalidModulus(value))
        }
    }

    /// Returns the value of this [`Modulus`].
    #[inline]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Lifts a reduced value into the centered range `(-m/2, m/2]`.
    #[inline]
    pub const fn centered(self, value: u64) -> i64 {
        if value > self.value / 2 {
            value as i64 - self.value as i64
        } else {
            value as i64
        }
    }

    /// Returns `round(m * numerator / denominator) mod m` with round-half-up.
    ///
    /// Negative numerators wrap around, so `fraction(-1, 8)` is `m - m/8` up to rounding.
    #[inline]
    pub fn fraction(self, numerator: i64, denominator: u64) -> u64 {
        debug_assert!(denominator > 0);
        let scaled = self.value as i128 * numerator as i128;
        let d = denominator as i128;
        let rounded = (scaled * 2 + d).div_euclid(2 * d);
        rounded.rem_euclid(self.value as i128) as u64
    }
}

impl TryFrom<u64> for Modulus {
    type Error = AlgebraError;

    #[inline]
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Modulus> for u64 {
    #[inline]
    fn from(modulus: Modulus) -> Self {
        modulus.value
    }
}

impl std::fmt::Display for Modulus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
