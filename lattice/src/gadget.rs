use algebra::random::DiscreteGaussian;
use algebra::reduce::Reduce;
use algebra::{AlgebraError, Basis, Polynomial};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::Rlwe;

/// A representation of Ring Learning with Errors (RLWE) ciphertexts with respect to different powers
/// of a base, used for homomorphic operations in lattice-based cryptography.
///
/// The `i`-th entry encrypts `B^i * m`. Multiplying by a polynomial decomposes it into
/// `d` base-`B` digit polynomials and pairs them with the entries, which keeps the noise
/// growth proportional to `B` instead of the modulus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GadgetRlwe {
    data: Vec<Rlwe>,
    basis: Basis,
}

impl GadgetRlwe {
    /// Creates a new [`GadgetRlwe`] from its levels.
    #[inline]
    pub fn new(data: Vec<Rlwe>, basis: Basis) -> Result<Self, AlgebraError> {
        if data.len() != basis.decompose_len() {
            return Err(AlgebraError::DecomposeLengthMismatch {
                expected: basis.decompose_len(),
                found: data.len(),
            });
        }
        if let Some((first, rest)) = data.split_first() {
            for c in rest {
                first.check_compatible(c)?;
            }
        }
        Ok(Self { data, basis })
    }

    /// Returns a reference to the levels of this [`GadgetRlwe`].
    #[inline]
    pub fn data(&self) -> &[Rlwe] {
        &self.data
    }

    /// Returns the decomposition basis of this [`GadgetRlwe`].
    #[inline]
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Returns an iterator over the levels.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Rlwe> {
        self.data.iter()
    }

    /// Encrypts `message` level by level: the `i`-th [`Rlwe`] holds `B^i * message`.
    pub fn encrypt<R>(
        message: &Polynomial,
        secret: &Polynomial,
        basis: Basis,
        gaussian: &DiscreteGaussian,
        rng: &mut R,
    ) -> Result<Self, AlgebraError>
    where
        R: Rng + CryptoRng,
    {
        let data = basis
            .powers(secret.modulus())
            .into_iter()
            .map(|power| Rlwe::encrypt(&message.mul_scalar(power), secret, gaussian, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { data, basis })
    }

    /// Returns the phase of every level, `B^i * m + e_i`.
    pub fn decrypt(&self, secret: &Polynomial) -> Result<Vec<Polynomial>, AlgebraError> {
        self.data.iter().map(|c| c.decrypt(secret)).collect()
    }

    /// Multiplies by `poly`, returning an [`Rlwe`] that encrypts `m * poly`.
    #[inline]
    pub fn mul_with_polynomial(&self, poly: &Polynomial) -> Result<Rlwe, AlgebraError> {
        self.mul_with_decomposed_polynomial(&poly.decompose(self.basis))
    }

    /// Computes `∑ digits_i * c_i` for an already decomposed multiplier.
    pub fn mul_with_decomposed_polynomial(
        &self,
        digits: &[Polynomial],
    ) -> Result<Rlwe, AlgebraError> {
        if digits.len() != self.data.len() {
            return Err(AlgebraError::DecomposeLengthMismatch {
                expected: self.data.len(),
                found: digits.len(),
            });
        }
        let first = &self.data[0];
        let mut acc = Rlwe::zero(first.dimension(), first.modulus());
        for (c, digit) in self.data.iter().zip(digits) {
            if digit.is_zero() {
                continue;
            }
            acc.add_assign_element_wise(&c.mul_with_polynomial(digit)?)?;
        }
        Ok(acc)
    }

    /// Multiplies by the integer `constant` through its digit decomposition.
    pub fn mul_with_constant(&self, constant: u64) -> Result<Rlwe, AlgebraError> {
        let first = &self.data[0];
        let modulus = first.modulus();
        let digits = self.basis.decompose_value(modulus.reduce(constant));
        let mut acc = Rlwe::zero(first.dimension(), modulus);
        for (c, digit) in self.data.iter().zip(digits) {
            if digit != 0 {
                acc.add_assign_element_wise(&c.mul_scalar(digit))?;
            }
        }
        Ok(acc)
    }
}
