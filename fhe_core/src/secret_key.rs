use algebra::random::sample_binary_values;
use algebra::reduce::Reduce;
use algebra::{Modulus, Polynomial};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    decode, encode, noise, FHECoreError, LweCiphertext, Parameters, SecretKeyType,
};

/// LWE secret key.
///
/// Coefficients are kept signed so the key lifts into whichever modulus a ciphertext uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweSecretKey {
    data: Vec<i64>,
    distr: SecretKeyType,
}

impl LweSecretKey {
    /// Creates a new [`LweSecretKey`].
    #[inline]
    pub fn new(data: Vec<i64>, distr: SecretKeyType) -> Self {
        Self { data, distr }
    }

    /// Samples a new [`LweSecretKey`] from the distribution named by `params`.
    pub fn generate<R>(params: &Parameters, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        let n = params.lwe_dimension();
        let data = match params.secret_key_type() {
            SecretKeyType::Binary => sample_binary_values(n, rng),
            SecretKeyType::Gaussian => params.secret_distribution().sample_values(n, rng),
        };
        Self::new(data, params.secret_key_type())
    }

    /// Returns the signed coefficients.
    #[inline]
    pub fn data(&self) -> &[i64] {
        &self.data
    }

    /// Returns the distribution type of this [`LweSecretKey`].
    #[inline]
    pub fn distr(&self) -> SecretKeyType {
        self.distr
    }

    /// Returns the dimension of this [`LweSecretKey`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Returns the coefficients reduced into `[0, m)`.
    #[inline]
    pub fn lift(&self, modulus: Modulus) -> Vec<u64> {
        self.data.iter().map(|&v| modulus.reduce(v)).collect()
    }
}

/// Ring secret key, a polynomial mod `Q`.
pub type RingSecretKey = Polynomial;

/// Boolean fhe's secret keys pack.
///
/// This struct contains the LWE secret key,
/// ring secret key and boolean fhe's parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretKeyPack {
    /// LWE secret key
    lwe_secret_key: LweSecretKey,
    /// ring secret key
    ring_secret_key: RingSecretKey,
    /// boolean fhe's parameters
    parameters: Parameters,
}

impl SecretKeyPack {
    /// Creates a new [`SecretKeyPack`], sampling both secrets from the configured distribution.
    pub fn new<R>(parameters: Parameters, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        let lwe_secret_key = LweSecretKey::generate(&parameters, rng);

        let n = parameters.ring_dimension();
        let modulus = parameters.ring_modulus();
        let ring_secret_key = match parameters.secret_key_type() {
            SecretKeyType::Binary => Polynomial::random_with_binary(n, modulus, rng),
            SecretKeyType::Gaussian => Polynomial::random_with_gaussian(
                n,
                modulus,
                parameters.secret_distribution(),
                rng,
            ),
        };

        Self {
            lwe_secret_key,
            ring_secret_key,
            parameters,
        }
    }

    /// Creates a [`SecretKeyPack`] from existing keys.
    pub fn from_keys(
        lwe_secret_key: LweSecretKey,
        ring_secret_key: RingSecretKey,
        parameters: Parameters,
    ) -> Result<Self, FHECoreError> {
        if lwe_secret_key.dimension() != parameters.lwe_dimension() {
            return Err(FHECoreError::LweDimensionUnValid(lwe_secret_key.dimension()));
        }
        if ring_secret_key.dimension() != parameters.ring_dimension() {
            return Err(FHECoreError::RingDimensionUnValid(
                ring_secret_key.dimension(),
            ));
        }
        if ring_secret_key.modulus() != parameters.ring_modulus() {
            return Err(FHECoreError::CiphertextModulusMismatch {
                expected: parameters.ring_modulus().value(),
                found: ring_secret_key.modulus().value(),
            });
        }
        Ok(Self {
            lwe_secret_key,
            ring_secret_key,
            parameters,
        })
    }

    /// Returns the lwe secret key of this [`SecretKeyPack`].
    #[inline]
    pub fn lwe_secret_key(&self) -> &LweSecretKey {
        &self.lwe_secret_key
    }

    /// Returns the ring secret key of this [`SecretKeyPack`].
    #[inline]
    pub fn ring_secret_key(&self) -> &RingSecretKey {
        &self.ring_secret_key
    }

    /// Returns the parameters of this [`SecretKeyPack`].
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Encrypts a bit into a [`LweCiphertext`] mod `q`.
    pub fn encrypt<R>(&self, message: bool, rng: &mut R) -> LweCiphertext
    where
        R: Rng + CryptoRng,
    {
        let modulus = self.parameters.lwe_modulus();
        LweCiphertext::encrypt(
            encode(message, modulus),
            &self.lwe_secret_key.lift(modulus),
            modulus,
            self.parameters.noise_distribution(),
            rng,
        )
    }

    /// Decrypts a [`LweCiphertext`] under its own modulus.
    #[inline]
    pub fn decrypt(&self, cipher_text: &LweCiphertext) -> Result<bool, FHECoreError> {
        let modulus = cipher_text.modulus();
        let phase = cipher_text.decrypt(&self.lwe_secret_key.lift(modulus))?;
        Ok(decode(phase, modulus))
    }

    /// Decrypts a [`LweCiphertext`], also returning the signed distance of the phase
    /// from the encoding of the decrypted bit.
    #[inline]
    pub fn decrypt_with_noise(
        &self,
        cipher_text: &LweCiphertext,
    ) -> Result<(bool, i64), FHECoreError> {
        let modulus = cipher_text.modulus();
        let phase = cipher_text.decrypt(&self.lwe_secret_key.lift(modulus))?;
        let bit = decode(phase, modulus);
        Ok((bit, noise(phase, bit, modulus)))
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use crate::{BlindRotationType, ConstParameters};

    use super::*;

    fn params(secret_key_type: SecretKeyType) -> Parameters {
        Parameters::new(ConstParameters {
            lwe_dimension: 16,
            lwe_modulus: 256,
            ring_dimension: 128,
            ring_modulus: 1032193,
            secret_key_type,
            secret_std_dev: 3.2,
            noise_std_dev: 3.2,
            blind_rotation_basis: 16,
            key_switching_basis: 16,
            blind_rotation_type: BlindRotationType::DM,
            modulus_switch: false,
        })
        .unwrap()
    }

    #[test]
    fn test_encrypt_decrypt() {
        let mut rng = thread_rng();
        for ty in [SecretKeyType::Gaussian, SecretKeyType::Binary] {
            let sk = SecretKeyPack::new(params(ty), &mut rng);
            assert_eq!(sk.lwe_secret_key().dimension(), 16);
            assert_eq!(sk.ring_secret_key().dimension(), 128);
            for _ in 0..50 {
                let m: bool = rng.gen();
                let c = sk.encrypt(m, &mut rng);
                assert_eq!(c.modulus().value(), 256);
                let (bit, noise) = sk.decrypt_with_noise(&c).unwrap();
                assert_eq!(bit, m);
                assert!(noise.abs() <= 20);
                assert_eq!(sk.decrypt(&c).unwrap(), m);
            }
        }
    }

    #[test]
    fn test_binary_secret_is_binary() {
        let mut rng = thread_rng();
        let sk = SecretKeyPack::new(params(SecretKeyType::Binary), &mut rng);
        assert!(sk.lwe_secret_key().data().iter().all(|&v| v == 0 || v == 1));
        assert!(sk.ring_secret_key().iter().all(|&v| v <= 1));
    }

    #[test]
    fn test_gaussian_secret_lifts_signed() {
        let key = LweSecretKey::new(vec![-1, 2, 0], SecretKeyType::Gaussian);
        assert_eq!(key.lift(Modulus::new(256).unwrap()), vec![255, 2, 0]);
        assert_eq!(key.lift(Modulus::new(1032193).unwrap()), vec![1032192, 2, 0]);
    }

    #[test]
    fn test_decrypt_dimension_mismatch() {
        let mut rng = thread_rng();
        let sk = SecretKeyPack::new(params(SecretKeyType::Binary), &mut rng);
        let c = LweCiphertext::zero(17, sk.parameters().lwe_modulus());
        assert!(sk.decrypt(&c).is_err());
    }
}
