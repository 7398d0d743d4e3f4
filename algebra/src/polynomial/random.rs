use rand::{CryptoRng, Rng};

use crate::random::{sample_binary_values, sample_uniform_values, DiscreteGaussian};
use crate::reduce::Reduce;
use crate::Modulus;

use super::Polynomial;

impl Polynomial {
    /// Generate a random [`Polynomial`] with uniform coefficients in `[0, m)`.
    #[inline]
    pub fn random<R>(n: usize, modulus: Modulus, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        Self::from_reduced(sample_uniform_values(n, modulus, rng), modulus)
    }

    /// Generate a random [`Polynomial`] with coefficients drawn from `gaussian`.
    #[inline]
    pub fn random_with_gaussian<R>(
        n: usize,
        modulus: Modulus,
        gaussian: &DiscreteGaussian,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + CryptoRng,
    {
        let values = gaussian.sample_values(n, rng);
        Self::from_reduced(
            values.into_iter().map(|v| modulus.reduce(v)).collect(),
            modulus,
        )
    }

    /// Generate a random [`Polynomial`] with binary coefficients.
    #[inline]
    pub fn random_with_binary<R>(n: usize, modulus: Modulus, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        Self::from_reduced(
            sample_binary_values(n, rng)
                .into_iter()
                .map(|v| v as u64)
                .collect(),
            modulus,
        )
    }
}
