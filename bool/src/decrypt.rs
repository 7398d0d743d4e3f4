use fhe_core::{decode, noise, LweCiphertext, LweSecretKey, SecretKeyPack};

use crate::FHEError;

/// Decryptor
///
/// Decrypts under the modulus each ciphertext carries, so fresh, bootstrapped and
/// modulus-switched ciphertexts all go through the same key.
#[derive(Debug, Clone)]
pub struct Decryptor {
    lwe_secret_key: LweSecretKey,
}

impl Decryptor {
    /// Create a Decryptor instance.
    #[inline]
    pub fn new(sk: &SecretKeyPack) -> Self {
        Self {
            lwe_secret_key: sk.lwe_secret_key().clone(),
        }
    }

    /// Decrypt a ciphertext into a bool message.
    #[inline]
    pub fn decrypt(&self, cipher_text: &LweCiphertext) -> Result<bool, FHEError> {
        self.decrypt_with_noise(cipher_text).map(|(m, _)| m)
    }

    /// Decrypt a ciphertext into a bool message and its noise.
    pub fn decrypt_with_noise(&self, cipher_text: &LweCiphertext) -> Result<(bool, i64), FHEError> {
        let modulus = cipher_text.modulus();
        let phase = cipher_text.decrypt(&self.lwe_secret_key.lift(modulus))?;
        let m = decode(phase, modulus);
        Ok((m, noise(phase, m, modulus)))
    }
}
