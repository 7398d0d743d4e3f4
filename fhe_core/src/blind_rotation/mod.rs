//! Blind rotation: rotating an RLWE accumulator by `-<a, s>` without learning `s`.

mod cggi;
mod dm;

pub use cggi::CggiBlindRotationKey;
pub use dm::DmBlindRotationKey;

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{BlindRotationType, FHECoreError, RlweCiphertext, SecretKeyPack};

/// A blind rotation strategy: key material generated once from the secrets,
/// then used read-only to rotate accumulators.
pub trait BlindRotation: Sized {
    /// Generates the key material from the secret keys.
    fn generate<R>(secret_key_pack: &SecretKeyPack, rng: &mut R) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng;

    /// Rotates `acc` by `X^{-<mask, s>}`, where `mask` holds the LWE mask coordinates mod `q`.
    fn blind_rotate(
        &self,
        acc: RlweCiphertext,
        mask: &[u64],
    ) -> Result<RlweCiphertext, FHECoreError>;
}

/// Blind rotation key.
///
/// In FHE, bootstrapping is a technique used to refresh the ciphertexts
/// during the homomorphic computation. As homomorphic operations are
/// performed on encrypted data, the noise in the ciphertext increases,
/// and if left unchecked, it can eventually lead to decryption errors.
/// Bootstrapping is a method to reduce the noise and refresh the
/// ciphertexts, allowing the computation to continue.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BlindRotationKey {
    /// DM blind rotation key
    DM(DmBlindRotationKey),
    /// CGGI blind rotation key
    CGGI(CggiBlindRotationKey),
}

impl BlindRotationKey {
    /// Returns the blind rotation algorithm of this key.
    #[inline]
    pub fn blind_rotation_type(&self) -> BlindRotationType {
        match self {
            BlindRotationKey::DM(_) => BlindRotationType::DM,
            BlindRotationKey::CGGI(_) => BlindRotationType::CGGI,
        }
    }
}

impl BlindRotation for BlindRotationKey {
    /// Generates the key named by the parameters of `secret_key_pack`.
    fn generate<R>(secret_key_pack: &SecretKeyPack, rng: &mut R) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        match secret_key_pack.parameters().blind_rotation_type() {
            BlindRotationType::DM => Ok(BlindRotationKey::DM(DmBlindRotationKey::generate(
                secret_key_pack,
                rng,
            )?)),
            BlindRotationType::CGGI => Ok(BlindRotationKey::CGGI(
                CggiBlindRotationKey::generate(secret_key_pack, rng)?,
            )),
        }
    }

    #[inline]
    fn blind_rotate(
        &self,
        acc: RlweCiphertext,
        mask: &[u64],
    ) -> Result<RlweCiphertext, FHECoreError> {
        match self {
            BlindRotationKey::DM(key) => key.blind_rotate(acc, mask),
            BlindRotationKey::CGGI(key) => key.blind_rotate(acc, mask),
        }
    }
}

/// Checks that the mask has one coordinate per key entry.
#[inline]
fn check_mask(mask: &[u64], lwe_dimension: usize) -> Result<(), FHECoreError> {
    if mask.len() != lwe_dimension {
        return Err(FHECoreError::CiphertextDimensionMismatch {
            expected: lwe_dimension,
            found: mask.len(),
        });
    }
    Ok(())
}
