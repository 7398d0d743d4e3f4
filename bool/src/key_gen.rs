//! implementation of key generation.

use fhe_core::{Parameters, SecretKeyPack};
use rand::{CryptoRng, Rng};

use crate::{EvaluationKey, FHEError};

/// Struct of key generation.
pub struct KeyGen;

impl KeyGen {
    /// Generate the secret keys.
    #[inline]
    pub fn generate_secret_key<R: Rng + CryptoRng>(
        params: Parameters,
        csrng: &mut R,
    ) -> SecretKeyPack {
        SecretKeyPack::new(params, csrng)
    }

    /// Generate the secret keys together with the matching evaluation key.
    pub fn generate_keys<R: Rng + CryptoRng>(
        params: Parameters,
        csrng: &mut R,
    ) -> Result<(SecretKeyPack, EvaluationKey), FHEError> {
        let sk = Self::generate_secret_key(params, csrng);
        let ek = EvaluationKey::new(&sk, csrng)?;
        Ok((sk, ek))
    }
}
