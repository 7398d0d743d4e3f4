use algebra::random::DiscreteGaussian;
use algebra::{AlgebraError, Basis, Polynomial};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{GadgetRlwe, Rlwe};

/// Represents a ciphertext in the Ring-GSW (Ring Learning With Errors) homomorphic encryption scheme.
///
/// It is a pair of [`GadgetRlwe`], encrypting `-s * m` and `m` under the ring secret `s`.
/// The external product [`Rgsw::mul_with_rlwe`] multiplies an [`Rlwe`] encryption of `p`
/// into an [`Rlwe`] encryption of `p * m` with noise growth independent of the modulus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgsw {
    c_neg_s_m: GadgetRlwe,
    c_m: GadgetRlwe,
}

impl Rgsw {
    /// Creates a new [`Rgsw`].
    #[inline]
    pub fn new(c_neg_s_m: GadgetRlwe, c_m: GadgetRlwe) -> Self {
        Self { c_neg_s_m, c_m }
    }

    /// Returns a reference to the `c_neg_s_m` of this [`Rgsw`].
    #[inline]
    pub fn c_neg_s_m(&self) -> &GadgetRlwe {
        &self.c_neg_s_m
    }

    /// Returns a reference to the `c_m` of this [`Rgsw`].
    #[inline]
    pub fn c_m(&self) -> &GadgetRlwe {
        &self.c_m
    }

    /// Returns the decomposition basis of this [`Rgsw`].
    #[inline]
    pub fn basis(&self) -> Basis {
        self.c_m.basis()
    }

    /// Encrypts `message` as `(RLWE'(-s * m), RLWE'(m))`.
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
        let neg_s_m = -secret.checked_mul(message)?;
        Ok(Self {
            c_neg_s_m: GadgetRlwe::encrypt(&neg_s_m, secret, basis, gaussian, rng)?,
            c_m: GadgetRlwe::encrypt(message, secret, basis, gaussian, rng)?,
        })
    }

    /// Performs the external product `RGSW(m) ⊡ RLWE(p) = RLWE(p * m)`.
    ///
    /// With `rlwe = (a, b)` the result is `c_neg_s_m · a + c_m · b`, which decrypts to
    /// `m * (b - a * s)`.
    #[inline]
    pub fn mul_with_rlwe(&self, rlwe: &Rlwe) -> Result<Rlwe, AlgebraError> {
        self.c_neg_s_m
            .mul_with_polynomial(rlwe.a())?
            .add_element_wise(&self.c_m.mul_with_polynomial(rlwe.b())?)
    }
}
