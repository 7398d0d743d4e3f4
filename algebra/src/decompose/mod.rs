//! Gadget bases and unsigned digit decomposition.

use serde::{Deserialize, Serialize};

use crate::reduce::{Reduce, ReduceMulAdd};
use crate::{AlgebraError, Modulus};

/// A decomposition basis `B` together with the digit count `d`,
/// the smallest `d` with `B^d >= m` for the modulus `m` it was built for.
///
/// Digits are unsigned, least significant first, each in `[0, B)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basis {
    basis: u64,
    decompose_len: usize,
}

impl Basis {
    /// Creates a new [`Basis`] covering every value below `modulus`.
    pub fn new(basis: u64, modulus: Modulus) -> Result<Self, AlgebraError> {
        Ok(Self {
            basis,
            decompose_len: digit_count(basis, modulus.value())?,
        })
    }

    /// Returns the basis value `B`.
    #[inline]
    pub fn basis(&self) -> u64 {
        self.basis
    }

    /// Returns the number of digits `d`.
    #[inline]
    pub fn decompose_len(&self) -> usize {
        self.decompose_len
    }

    /// Decomposes `value` into `d` digits, least significant first.
    #[inline]
    pub fn decompose_value(&self, value: u64) -> Vec<u64> {
        let mut digits = vec![0; self.decompose_len];
        self.decompose_value_into(value, &mut digits);
        digits
    }

    /// Writes the digits of `value` into `digits`, which must hold `d` entries.
    #[inline]
    pub fn decompose_value_into(&self, mut value: u64, digits: &mut [u64]) {
        debug_assert_eq!(digits.len(), self.decompose_len);
        for digit in digits.iter_mut() {
            *digit = value % self.basis;
            value /= self.basis;
        }
    }

    /// Recomposes `∑ digit_i * B^i (mod modulus)`.
    pub fn compose_value(&self, digits: &[u64], modulus: Modulus) -> Result<u64, AlgebraError> {
        if digits.len() != self.decompose_len {
            return Err(AlgebraError::DecomposeLengthMismatch {
                expected: self.decompose_len,
                found: digits.len(),
            });
        }
        let basis = modulus.reduce(self.basis);
        Ok(digits
            .iter()
            .rev()
            .fold(0, |acc, &digit| {
                modulus.reduce_mul_add(acc, basis, modulus.reduce(digit))
            }))
    }

    /// Returns `[B^0, B^1, ..., B^(d-1)] (mod modulus)`.
    pub fn powers(&self, modulus: Modulus) -> Vec<u64> {
        let basis = modulus.reduce(self.basis);
        std::iter::successors(Some(modulus.reduce(1u64)), |&p| {
            Some(modulus.reduce_mul_add(p, basis, 0))
        })
        .take(self.decompose_len)
        .collect()
    }
}

/// Returns the smallest `d >= 1` with `basis^d >= bound`.
pub fn digit_count(basis: u64, bound: u64) -> Result<usize, AlgebraError> {
    if basis < 2 {
        return Err(AlgebraError::InvalidBasis(basis));
    }
    let mut d = 1;
    let mut power = basis as u128;
    while power < bound as u128 {
        power *= basis as u128;
        d += 1;
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(32, 1024).unwrap(), 2);
        assert_eq!(digit_count(16, 256).unwrap(), 2);
        assert_eq!(digit_count(32, 132120577).unwrap(), 6);
        assert_eq!(digit_count(16, 1032193).unwrap(), 5);
        assert_eq!(digit_count(2, 2).unwrap(), 1);
        assert_eq!(digit_count(3, 1 << 32).unwrap(), 21);
        assert_eq!(digit_count(1, 8), Err(AlgebraError::InvalidBasis(1)));
    }

    #[test]
    fn test_decompose_compose_value() {
        let mut rng = thread_rng();
        for (b, m) in [(32, 132120577), (16, 1024), (7, 1000), (2, 1 << 32)] {
            let modulus = Modulus::new(m).unwrap();
            let basis = Basis::new(b, modulus).unwrap();
            for _ in 0..100 {
                let v = rng.gen_range(0..m);
                let digits = basis.decompose_value(v);
                assert!(digits.iter().all(|&d| d < b));
                assert_eq!(basis.compose_value(&digits, modulus).unwrap(), v);
            }
        }
    }

    #[test]
    fn test_digits_least_significant_first() {
        let modulus = Modulus::new(1024).unwrap();
        let basis = Basis::new(32, modulus).unwrap();
        assert_eq!(basis.decompose_value(33), vec![1, 1]);
        assert_eq!(basis.decompose_value(1023), vec![31, 31]);
        assert_eq!(basis.powers(modulus), vec![1, 32]);
        assert!(basis.compose_value(&[1], modulus).is_err());
    }
}
