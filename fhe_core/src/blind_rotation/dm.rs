use algebra::{Basis, Polynomial};
use lattice::Rgsw;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{generate_in_parallel, FHECoreError, RlweCiphertext, SecretKeyPack};

use super::{check_mask, BlindRotation};

/// DM blind rotation key.
///
/// Entry `(i, v, j)` is `RGSW(X^{-v * B^j * s_i})`, for every LWE secret coordinate `i`,
/// digit value `v ∈ [0, B)` and digit position `j ∈ [0, d_g)`. Entries are stored flat
/// in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmBlindRotationKey {
    key: Vec<Rgsw>,
    lwe_dimension: usize,
    /// `B_gd` over `q`.
    mask_basis: Basis,
}

impl DmBlindRotationKey {
    #[inline]
    fn index(&self, i: usize, v: u64, j: usize) -> usize {
        let d = self.mask_basis.decompose_len();
        (i * self.mask_basis.basis() as usize + v as usize) * d + j
    }

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

impl BlindRotation for DmBlindRotationKey {
    #[tracing::instrument(skip_all, name = "dm_blind_rotation_key")]
    fn generate<R>(secret_key_pack: &SecretKeyPack, rng: &mut R) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        let params = secret_key_pack.parameters();
        let lwe_dimension = params.lwe_dimension();
        let ring_dimension = params.ring_dimension();
        let ring_modulus = params.ring_modulus();
        let mask_basis = params.mask_basis();
        let blind_rotation_basis = params.blind_rotation_basis();
        let gaussian = params.noise_distribution();
        let ring_secret_key = secret_key_pack.ring_secret_key();
        let s = secret_key_pack.lwe_secret_key().data();

        let basis = mask_basis.basis() as usize;
        let d = mask_basis.decompose_len();
        let twice_n = 2 * ring_dimension as i128;

        // B^j mod 2N
        let powers: Vec<i128> =
            std::iter::successors(Some(1i128), |&p| Some(p * basis as i128 % twice_n))
                .take(d)
                .collect();

        let key = generate_in_parallel(lwe_dimension * basis * d, rng, |index, rng| {
            let (i, v, j) = (index / (basis * d), (index / d) % basis, index % d);
            let exponent = (-(v as i128) * powers[j] * s[i] as i128).rem_euclid(twice_n) as usize;
            Rgsw::encrypt(
                &Polynomial::monomial(exponent, ring_dimension, ring_modulus),
                ring_secret_key,
                blind_rotation_basis,
                gaussian,
                rng,
            )
            .map_err(FHECoreError::from)
        })?;

        tracing::debug!(rgsw = key.len(), "generated DM blind rotation key");

        Ok(Self {
            key,
            lwe_dimension,
            mask_basis,
        })
    }

    /// Performs the blind rotation.
    ///
    /// Each non-zero coordinate `a_i` is decomposed into `d_g` digits `v_j`, and
    /// `ACC = RGSW(X^{-v_j * B^j * s_i}) ⊡ ACC` is applied for every position `j`.
    fn blind_rotate(
        &self,
        acc: RlweCiphertext,
        mask: &[u64],
    ) -> Result<RlweCiphertext, FHECoreError> {
        check_mask(mask, self.lwe_dimension)?;

        let mut digits = vec![0; self.mask_basis.decompose_len()];
        let mut acc = acc;
        for (i, &a_i) in mask.iter().enumerate() {
            if a_i == 0 {
                continue;
            }
            self.mask_basis.decompose_value_into(a_i, &mut digits);
            for (j, &v) in digits.iter().enumerate() {
                acc = self.key[self.index(i, v, j)].mul_with_rlwe(&acc)?;
            }
        }
        Ok(acc)
    }
}
