use algebra::random::DiscreteGaussian;
use algebra::Polynomial;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{FHECoreError, RingSecretKey, RlweCiphertext};

/// RLWE public key `(a0, a1 = a0 * s + e)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RlwePublicKey {
    key: RlweCiphertext,
}

impl RlwePublicKey {
    /// Samples a new [`RlwePublicKey`] for `ring_secret_key`.
    pub fn new<R: Rng + CryptoRng>(
        ring_secret_key: &RingSecretKey,
        gaussian: &DiscreteGaussian,
        csrng: &mut R,
    ) -> RlwePublicKey {
        Self {
            key: RlweCiphertext::generate_random_zero_sample(ring_secret_key, gaussian, csrng),
        }
    }

    /// Returns a reference to the key of this [`RlwePublicKey`].
    #[inline]
    pub fn key(&self) -> &RlweCiphertext {
        &self.key
    }

    /// Encrypts `message` as `(a0, a1 + message)`.
    ///
    /// No fresh randomness is drawn: the result carries exactly the key noise.
    #[inline]
    pub fn encrypt(&self, message: &Polynomial) -> Result<RlweCiphertext, FHECoreError> {
        Ok(self.key.clone().add_plaintext(message)?)
    }
}

#[cfg(test)]
mod tests {
    use algebra::Modulus;
    use rand::prelude::*;

    use super::*;

    #[test]
    fn test_public_key_encrypt() {
        let mut rng = thread_rng();
        let modulus = Modulus::new(1032193).unwrap();
        let gaussian = DiscreteGaussian::new(3.2).unwrap();
        let secret = Polynomial::random_with_binary(128, modulus, &mut rng);
        let pk = RlwePublicKey::new(&secret, &gaussian, &mut rng);

        let message = Polynomial::random(128, modulus, &mut rng);
        let c = pk.encrypt(&message).unwrap();
        assert_eq!(c.a(), pk.key().a());
        let noise = c.decrypt(&secret).unwrap() - &message;
        assert!(noise.centered().iter().all(|v| v.abs() <= 20));

        assert!(pk.encrypt(&Polynomial::zero(64, modulus)).is_err());
    }
}
