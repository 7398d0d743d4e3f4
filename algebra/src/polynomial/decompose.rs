use crate::reduce::{ReduceAddAssign, ReduceMul};
use crate::{AlgebraError, Basis};

use super::Polynomial;

impl Polynomial {
    /// Decomposes every coefficient in `basis`, returning `d` digit polynomials,
    /// least significant first, so that `self = ∑ B^i * digits_i`.
    pub fn decompose(&self, basis: Basis) -> Vec<Polynomial> {
        let n = self.dimension();
        let len = basis.decompose_len();
        let mut digits = vec![vec![0u64; n]; len];
        let mut buf = vec![0u64; len];
        for (k, &coeff) in self.iter().enumerate() {
            basis.decompose_value_into(coeff, &mut buf);
            for (digit_poly, &digit) in digits.iter_mut().zip(&buf) {
                digit_poly[k] = digit;
            }
        }
        digits
            .into_iter()
            .map(|data| Polynomial::from_reduced(data, self.modulus()))
            .collect()
    }

    /// Recomposes `∑ B^i * parts_i`, the inverse of [`Polynomial::decompose`].
    pub fn compose(parts: &[Polynomial], basis: Basis) -> Result<Polynomial, AlgebraError> {
        if parts.len() != basis.decompose_len() {
            return Err(AlgebraError::DecomposeLengthMismatch {
                expected: basis.decompose_len(),
                found: parts.len(),
            });
        }
        let first = &parts[0];
        let modulus = first.modulus();
        let mut res = Polynomial::zero(first.dimension(), modulus);
        for (part, power) in parts.iter().zip(basis.powers(modulus)) {
            res.check_compatible(part)?;
            for (acc, &v) in res.iter_mut().zip(part.iter()) {
                modulus.reduce_add_assign(acc, modulus.reduce_mul(v, power));
            }
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use crate::Modulus;

    use super::*;

    #[test]
    fn test_polynomial_decompose_round_trip() {
        let mut rng = thread_rng();
        for (b, m) in [(32, 132120577), (16, 1032193), (32, 1024)] {
            let modulus = Modulus::new(m).unwrap();
            let basis = Basis::new(b, modulus).unwrap();
            let poly = Polynomial::random(128, modulus, &mut rng);
            let parts = poly.decompose(basis);
            assert_eq!(parts.len(), basis.decompose_len());
            assert!(parts.iter().all(|p| p.iter().all(|&v| v < b)));
            assert_eq!(Polynomial::compose(&parts, basis).unwrap(), poly);
        }
    }

    #[test]
    fn test_compose_rejects_wrong_length() {
        let modulus = Modulus::new(1024).unwrap();
        let basis = Basis::new(32, modulus).unwrap();
        let parts = vec![Polynomial::zero(8, modulus)];
        assert_eq!(
            Polynomial::compose(&parts, basis),
            Err(AlgebraError::DecomposeLengthMismatch {
                expected: 2,
                found: 1
            })
        );
    }
}
