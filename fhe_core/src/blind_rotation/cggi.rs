use algebra::Polynomial;
use lattice::Rgsw;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    generate_in_parallel, BlindRotationType, FHECoreError, RlweCiphertext, SecretKeyPack,
    SecretKeyType,
};

use super::{check_mask, BlindRotation};

/// CGGI blind rotation key, one `RGSW(s_i)` per binary LWE secret coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CggiBlindRotationKey {
    key: Vec<Rgsw>,
    /// `2N`, the modulus of monomial exponents.
    twice_ring_dimension: usize,
}

impl CggiBlindRotationKey {
    /// Returns the number of RGSW ciphertexts held.
    #[inline]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Returns `true` if the key holds no RGSW ciphertext.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl BlindRotation for CggiBlindRotationKey {
    #[tracing::instrument(skip_all, name = "cggi_blind_rotation_key")]
    fn generate<R>(secret_key_pack: &SecretKeyPack, rng: &mut R) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        let params = secret_key_pack.parameters();
        let lwe_secret_key = secret_key_pack.lwe_secret_key();
        if lwe_secret_key.distr() != SecretKeyType::Binary {
            return Err(FHECoreError::SecretKeyTypeNotSupported {
                blind_rotation_type: BlindRotationType::CGGI,
                secret_key_type: lwe_secret_key.distr(),
            });
        }

        let ring_dimension = params.ring_dimension();
        let ring_modulus = params.ring_modulus();
        let blind_rotation_basis = params.blind_rotation_basis();
        let gaussian = params.noise_distribution();
        let ring_secret_key = secret_key_pack.ring_secret_key();
        let s = lwe_secret_key.data();

        let key = generate_in_parallel(s.len(), rng, |i, rng| {
            Rgsw::encrypt(
                &Polynomial::constant(s[i] as u64, ring_dimension, ring_modulus),
                ring_secret_key,
                blind_rotation_basis,
                gaussian,
                rng,
            )
            .map_err(FHECoreError::from)
        })?;

        tracing::debug!(rgsw = key.len(), "generated CGGI blind rotation key");

        Ok(Self {
            key,
            twice_ring_dimension: 2 * ring_dimension,
        })
    }

    /// Performs the blind rotation.
    ///
    /// For every non-zero `a_i`, `ACC = ACC + (X^{-a_i} - 1) * (RGSW(s_i) ⊡ ACC)`, which is
    /// `X^{-a_i} * ACC` when `s_i = 1` and `ACC` when `s_i = 0`.
    fn blind_rotate(
        &self,
        acc: RlweCiphertext,
        mask: &[u64],
    ) -> Result<RlweCiphertext, FHECoreError> {
        check_mask(mask, self.key.len())?;

        let ring_dimension = self.twice_ring_dimension / 2;
        let modulus = acc.modulus();
        let one = Polynomial::one(ring_dimension, modulus);

        self.key
            .iter()
            .zip(mask)
            .filter(|(_, a_i)| **a_i != 0)
            .try_fold(acc, |mut acc, (s_i, &a_i)| {
                // X^{-a_i} - 1, equal to -2 when a_i = N
                let exponent = self.twice_ring_dimension - a_i as usize % self.twice_ring_dimension;
                let factor = Polynomial::monomial(exponent, ring_dimension, modulus) - &one;
                // acc_mul_rgsw = ACC * RGSW(s_i)
                let acc_mul_rgsw = s_i.mul_with_rlwe(&acc)?;
                // ACC = ACC + (X^{-a_i} - 1) * ACC * RGSW(s_i)
                acc.add_assign_element_wise(&acc_mul_rgsw.mul_with_polynomial(&factor)?)?;
                Ok(acc)
            })
    }
}
