use algebra::random::DiscreteGaussian;
use algebra::Modulus;
use fhe_core::{encode, LweCiphertext, SecretKeyPack};
use rand::{CryptoRng, Rng};

/// Encryptor
///
/// Holds the LWE secret key already reduced mod `q`, so repeated encryptions skip the lift.
#[derive(Debug, Clone)]
pub struct Encryptor {
    lwe_secret_key: Vec<u64>,
    lwe_modulus: Modulus,
    noise_distribution: DiscreteGaussian,
}

impl Encryptor {
    /// New a Encryptor instance.
    #[inline]
    pub fn new(sk: &SecretKeyPack) -> Self {
        let parameters = sk.parameters();
        let lwe_modulus = parameters.lwe_modulus();
        Self {
            lwe_secret_key: sk.lwe_secret_key().lift(lwe_modulus),
            lwe_modulus,
            noise_distribution: *parameters.noise_distribution(),
        }
    }

    /// Encrypt a bool message into a ciphertext of dimension `n` mod `q`.
    #[inline]
    pub fn encrypt<R>(&self, message: bool, rng: &mut R) -> LweCiphertext
    where
        R: Rng + CryptoRng,
    {
        LweCiphertext::encrypt(
            encode(message, self.lwe_modulus),
            &self.lwe_secret_key,
            self.lwe_modulus,
            &self.noise_distribution,
            rng,
        )
    }
}
