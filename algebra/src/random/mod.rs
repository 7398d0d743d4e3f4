//! Defines some algorithms for random values generation.

use rand::distributions::Uniform;
use rand::{CryptoRng, Rng};
use rand_distr::{Distribution, Normal};

use crate::{AlgebraError, Modulus};

/// Rounds to the nearest integer, ties toward positive infinity.
///
/// Used wherever a real-valued sample is discretized, so `-2.5 -> -2` and `2.5 -> 3`.
#[inline]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// The centered discrete gaussian `round(N(0, std_dev^2))`, truncated at `6 * std_dev`.
#[derive(Clone, Copy, Debug)]
pub struct DiscreteGaussian {
    normal: Normal<f64>,
    max_std_dev: f64,
}

impl DiscreteGaussian {
    /// Creates a new [`DiscreteGaussian`].
    ///
    /// `std_dev` must be finite and non-negative. A zero deviation always samples `0`.
    #[inline]
    pub fn new(std_dev: f64) -> Result<Self, AlgebraError> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(AlgebraError::DistributionErr);
        }
        let normal = Normal::new(0.0, std_dev).map_err(|_| AlgebraError::DistributionErr)?;
        Ok(Self {
            normal,
            max_std_dev: std_dev * 6.0,
        })
    }

    /// Returns the standard deviation (`σ`) of the distribution.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.normal.std_dev()
    }

    /// Returns the truncation bound of the distribution.
    #[inline]
    pub fn max_std_dev(&self) -> f64 {
        self.max_std_dev
    }

    /// Samples `length` values.
    #[inline]
    pub fn sample_values<R>(&self, length: usize, rng: &mut R) -> Vec<i64>
    where
        R: Rng + CryptoRng,
    {
        self.sample_iter(rng).take(length).collect()
    }
}

impl Distribution<i64> for DiscreteGaussian {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        loop {
            let value = self.normal.sample(rng);
            if value.abs() <= self.max_std_dev {
                return round_half_up(value);
            }
        }
    }
}

/// The binary sampler.
///
/// prob\[1] = prob\[0] = 0.5
#[derive(Clone, Copy, Debug)]
pub struct BinarySampler;

impl Distribution<i64> for BinarySampler {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        (rng.next_u32() & 0b1) as i64
    }
}

/// Sample a binary vector.
pub fn sample_binary_values<R>(length: usize, rng: &mut R) -> Vec<i64>
where
    R: Rng + CryptoRng,
{
    let mut v = vec![0; length];
    let mut iter = v.chunks_exact_mut(32);
    for chunk in &mut iter {
        let mut r = rng.next_u32();
        for elem in chunk.iter_mut() {
            *elem = (r & 0b1) as i64;
            r >>= 1;
        }
    }
    let mut r = rng.next_u32();
    for elem in iter.into_remainder() {
        *elem = (r & 0b1) as i64;
        r >>= 1;
    }
    v
}

/// Sample a vector uniformly from `[0, m)`.
#[inline]
pub fn sample_uniform_values<R>(length: usize, modulus: Modulus, rng: &mut R) -> Vec<u64>
where
    R: Rng + CryptoRng,
{
    Uniform::new(0, modulus.value())
        .sample_iter(rng)
        .take(length)
        .collect()
}
