use algebra::{random::DiscreteGaussian, random::sample_uniform_values, reduce::*};
use algebra::{AlgebraError, Modulus};
use rand::{CryptoRng, Rng};
use rand::distributions::Distribution;
use serde::{Deserialize, Serialize};

/// Represents a cryptographic structure based on the Learning with Errors (LWE) problem.
///
/// A ciphertext is a mask `a ∈ Z_m^n` and a body `b ∈ Z_m` with
/// `b = <a, s> + message + e (mod m)`. The modulus travels with the ciphertext,
/// so the same type carries fresh inputs mod `q` and bootstrapped outputs mod `Q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lwe {
    /// The public vector part of the LWE instance.
    a: Vec<u64>,
    /// The dot product of `a` with a secret vector, plus message and some noise.
    b: u64,
    modulus: Modulus,
}

impl Lwe {
    /// Creates a new [`Lwe`], reducing every component into `[0, m)`.
    #[inline]
    pub fn new(a: Vec<u64>, b: u64, modulus: Modulus) -> Self {
        let mut a = a;
        a.iter_mut().for_each(|v| *v = modulus.reduce(*v));
        Self {
            a,
            b: modulus.reduce(b),
            modulus,
        }
    }

    /// Generates a [`Lwe`] with all values are `0`.
    #[inline]
    pub fn zero(dimension: usize, modulus: Modulus) -> Self {
        Self {
            a: vec![0; dimension],
            b: 0,
            modulus,
        }
    }

    /// Returns a reference to the `a` of this [`Lwe`].
    #[inline]
    pub fn a(&self) -> &[u64] {
        &self.a
    }

    /// Returns the `b` of this [`Lwe`].
    #[inline]
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Returns the modulus of this [`Lwe`].
    #[inline]
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Returns the dimension of this [`Lwe`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.a.len()
    }

    /// Checks that `self` and `rhs` share dimension and modulus.
    #[inline]
    pub fn check_compatible(&self, rhs: &Self) -> Result<(), AlgebraError> {
        if self.dimension() != rhs.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                lhs: self.dimension(),
                rhs: rhs.dimension(),
            });
        }
        if self.modulus != rhs.modulus {
            return Err(AlgebraError::ModulusMismatch {
                lhs: self.modulus.value(),
                rhs: rhs.modulus.value(),
            });
        }
        Ok(())
    }

    /// Perform component-wise reduce addition of two [`Lwe`].
    #[inline]
    pub fn add_reduce_component_wise(mut self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.add_reduce_assign_component_wise(rhs)?;
        Ok(self)
    }

    /// Performs an in-place component-wise reduce addition
    /// on the `self` [`Lwe`] with another `rhs` [`Lwe`].
    #[inline]
    pub fn add_reduce_assign_component_wise(&mut self, rhs: &Self) -> Result<(), AlgebraError> {
        self.check_compatible(rhs)?;
        let modulus = self.modulus;
        self.a
            .iter_mut()
            .zip(rhs.a())
            .for_each(|(a, &b)| modulus.reduce_add_assign(a, b));
        modulus.reduce_add_assign(&mut self.b, rhs.b);
        Ok(())
    }

    /// Perform component-wise subtraction of two [`Lwe`].
    #[inline]
    pub fn sub_reduce_component_wise(mut self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.sub_reduce_assign_component_wise(rhs)?;
        Ok(self)
    }

    /// Performs an in-place component-wise subtraction
    /// on the `self` [`Lwe`] with another `rhs` [`Lwe`].
    #[inline]
    pub fn sub_reduce_assign_component_wise(&mut self, rhs: &Self) -> Result<(), AlgebraError> {
        self.check_compatible(rhs)?;
        let modulus = self.modulus;
        self.a
            .iter_mut()
            .zip(rhs.a())
            .for_each(|(a, &b)| modulus.reduce_sub_assign(a, b));
        modulus.reduce_sub_assign(&mut self.b, rhs.b);
        Ok(())
    }

    /// Performs an in-place scalar multiplication
    /// on the `self` [`Lwe`] with `scalar`.
    #[inline]
    pub fn mul_scalar_reduce_assign(&mut self, scalar: u64) {
        let modulus = self.modulus;
        let scalar = modulus.reduce(scalar);
        self.a
            .iter_mut()
            .for_each(|v| modulus.reduce_mul_assign(v, scalar));
        modulus.reduce_mul_assign(&mut self.b, scalar);
    }

    /// Performs an negation on the `self` [`Lwe`].
    #[inline]
    pub fn neg_reduce(&self) -> Self {
        let mut res = self.clone();
        res.neg_reduce_assign();
        res
    }

    /// Performs an in-place negation on the `self` [`Lwe`].
    #[inline]
    pub fn neg_reduce_assign(&mut self) {
        let modulus = self.modulus;
        self.a.iter_mut().for_each(|v| modulus.reduce_neg_assign(v));
        modulus.reduce_neg_assign(&mut self.b);
    }

    /// Adds `value` to the body, shifting the encrypted message by `value`.
    #[inline]
    pub fn add_to_body(&mut self, value: u64) {
        let modulus = self.modulus;
        modulus.reduce_add_assign(&mut self.b, modulus.reduce(value));
    }

    /// Encrypts an already scaled `message` under `secret`, whose entries must be reduced mod `modulus`.
    pub fn encrypt<R>(
        message: u64,
        secret: &[u64],
        modulus: Modulus,
        gaussian: &DiscreteGaussian,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let a = sample_uniform_values(secret.len(), modulus, rng);
        let e: i64 = gaussian.sample(rng);
        let b = modulus.reduce_add(
            modulus.reduce_dot_product(&a, secret),
            modulus.reduce_add(modulus.reduce(message), modulus.reduce(e)),
        );
        Self { a, b, modulus }
    }

    /// Returns the phase `b - <a, s> (mod m)`, the scaled message plus noise.
    #[inline]
    pub fn decrypt(&self, secret: &[u64]) -> Result<u64, AlgebraError> {
        if secret.len() != self.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                lhs: self.dimension(),
                rhs: secret.len(),
            });
        }
        Ok(self
            .modulus
            .reduce_sub(self.b, self.modulus.reduce_dot_product(&self.a, secret)))
    }
}
