use algebra::random::DiscreteGaussian;
use algebra::reduce::ReduceNeg;
use algebra::{AlgebraError, Modulus, Polynomial};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::Lwe;

/// A cryptographic structure for Ring Learning with Errors (RLWE).
///
/// It consists of two [`Polynomial`] `a` and `b` of the same dimension and modulus,
/// with `b = a * s + m + e` for a ring secret `s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rlwe {
    /// Represents the first component in the RLWE structure.
    a: Polynomial,
    /// Represents the second component in the RLWE structure.
    b: Polynomial,
}

impl Rlwe {
    /// Creates a new [`Rlwe`], checking that `a` and `b` agree in dimension and modulus.
    #[inline]
    pub fn new(a: Polynomial, b: Polynomial) -> Result<Self, AlgebraError> {
        a.check_compatible(&b)?;
        Ok(Self { a, b })
    }

    /// Creates a new [`Rlwe`] that is initialized to zero.
    #[inline]
    pub fn zero(n: usize, modulus: Modulus) -> Self {
        Self {
            a: Polynomial::zero(n, modulus),
            b: Polynomial::zero(n, modulus),
        }
    }

    /// Creates the noiseless trivial encryption `(0, message)`.
    #[inline]
    pub fn trivial(message: Polynomial) -> Self {
        Self {
            a: Polynomial::zero(message.dimension(), message.modulus()),
            b: message,
        }
    }

    /// Returns a reference to the `a` of this [`Rlwe`].
    #[inline]
    pub fn a(&self) -> &Polynomial {
        &self.a
    }

    /// Returns a reference to the `b` of this [`Rlwe`].
    #[inline]
    pub fn b(&self) -> &Polynomial {
        &self.b
    }

    /// Returns the ring dimension of this [`Rlwe`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.a.dimension()
    }

    /// Returns the modulus of this [`Rlwe`].
    #[inline]
    pub fn modulus(&self) -> Modulus {
        self.a.modulus()
    }

    /// Encrypts `message` under `secret`: `b = a * s + message + e` with uniform `a`
    /// and gaussian `e`.
    pub fn encrypt<R>(
        message: &Polynomial,
        secret: &Polynomial,
        gaussian: &DiscreteGaussian,
        rng: &mut R,
    ) -> Result<Self, AlgebraError>
    where
        R: Rng + CryptoRng,
    {
        message.check_compatible(secret)?;
        let n = secret.dimension();
        let modulus = secret.modulus();

        let a = Polynomial::random(n, modulus, rng);
        let e = Polynomial::random_with_gaussian(n, modulus, gaussian, rng);
        let b = &a * secret + message + &e;

        Ok(Self { a, b })
    }

    /// Generate a [`Rlwe`] sample which encrypts `0`.
    #[inline]
    pub fn generate_random_zero_sample<R>(
        secret: &Polynomial,
        gaussian: &DiscreteGaussian,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let n = secret.dimension();
        let modulus = secret.modulus();

        let a = Polynomial::random(n, modulus, rng);
        let e = Polynomial::random_with_gaussian(n, modulus, gaussian, rng);
        let b = &a * secret + &e;

        Self { a, b }
    }

    /// Returns the phase `b - a * s`.
    #[inline]
    pub fn decrypt(&self, secret: &Polynomial) -> Result<Polynomial, AlgebraError> {
        self.b.checked_sub(&self.a.checked_mul(secret)?)
    }

    /// Checks that `self` and `rhs` share dimension and modulus.
    #[inline]
    pub fn check_compatible(&self, rhs: &Self) -> Result<(), AlgebraError> {
        self.a.check_compatible(&rhs.a)
    }

    /// Perform element-wise addition of two [`Rlwe`].
    #[inline]
    pub fn add_element_wise(mut self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.add_assign_element_wise(rhs)?;
        Ok(self)
    }

    /// Performs an in-place element-wise addition
    /// on the `self` [`Rlwe`] with another `rhs` [`Rlwe`].
    #[inline]
    pub fn add_assign_element_wise(&mut self, rhs: &Self) -> Result<(), AlgebraError> {
        self.check_compatible(rhs)?;
        self.a += &rhs.a;
        self.b += &rhs.b;
        Ok(())
    }

    /// Perform element-wise subtraction of two [`Rlwe`].
    #[inline]
    pub fn sub_element_wise(mut self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.sub_assign_element_wise(rhs)?;
        Ok(self)
    }

    /// Performs an in-place element-wise subtraction
    /// on the `self` [`Rlwe`] with another `rhs` [`Rlwe`].
    #[inline]
    pub fn sub_assign_element_wise(&mut self, rhs: &Self) -> Result<(), AlgebraError> {
        self.check_compatible(rhs)?;
        self.a -= &rhs.a;
        self.b -= &rhs.b;
        Ok(())
    }

    /// Adds a plaintext polynomial onto `b`, shifting the encrypted message by it.
    #[inline]
    pub fn add_plaintext(mut self, plaintext: &Polynomial) -> Result<Self, AlgebraError> {
        self.b.check_compatible(plaintext)?;
        self.b += plaintext;
        Ok(self)
    }

    /// Multiplies both components by a known polynomial.
    ///
    /// The noise grows with the norm of `poly`; callers keep its coefficients small.
    #[inline]
    pub fn mul_with_polynomial(&self, poly: &Polynomial) -> Result<Self, AlgebraError> {
        Ok(Self {
            a: self.a.checked_mul(poly)?,
            b: self.b.checked_mul(poly)?,
        })
    }

    /// Multiplies both components by `scalar`.
    #[inline]
    pub fn mul_scalar(&self, scalar: u64) -> Self {
        Self {
            a: self.a.mul_scalar(scalar),
            b: self.b.mul_scalar(scalar),
        }
    }

    /// Extract an LWE sample from RLWE.
    ///
    /// The result encrypts the constant coefficient of the message under the
    /// coefficient vector of the ring secret: `a'_0 = a_0`, `a'_k = -a_{N-k}`, `b' = b_0`.
    #[inline]
    pub fn extract_lwe(&self) -> Lwe {
        let modulus = self.modulus();
        let a = self.a.data();
        let mut mask = Vec::with_capacity(a.len());
        mask.push(a[0]);
        mask.extend(a[1..].iter().rev().map(|&v| modulus.reduce_neg(v)));
        Lwe::new(mask, self.b[0], modulus)
    }
}
