use algebra::{Basis, Modulus};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{generate_in_parallel, FHECoreError, LweCiphertext, SecretKeyPack};

/// The Key Switching Key.
///
/// This struct stores the key that switches an extracted [`LweCiphertext`] under the
/// coefficients of the ring secret key (dimension `N`, modulus `Q`) to a [`LweCiphertext`]
/// under the LWE secret key (dimension `n`, modulus `Q`).
///
/// Entry `(i, v, j)` encrypts `v * B_ks^j * z_i` under the LWE secret, where `z_i` is the
/// `i`-th ring secret coefficient. Entries are stored flat in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeySwitchingKey {
    /// LWE vector dimension, refers to **`n`** in the paper.
    lwe_dimension: usize,
    /// Ring dimension, the dimension of accepted ciphertexts.
    ring_dimension: usize,
    /// Ring modulus **`Q`**.
    modulus: Modulus,
    /// Key switching basis **`B_ks`** over `Q`.
    basis: Basis,
    /// Key Switching Key data
    key: Vec<LweCiphertext>,
}

impl KeySwitchingKey {
    /// Generates a new [`KeySwitchingKey`].
    #[tracing::instrument(skip_all, name = "key_switching_key")]
    pub fn generate<R>(secret_key_pack: &SecretKeyPack, rng: &mut R) -> Result<Self, FHECoreError>
    where
        R: Rng + CryptoRng,
    {
        let parameters = secret_key_pack.parameters();
        let lwe_dimension = parameters.lwe_dimension();
        let ring_dimension = parameters.ring_dimension();
        let modulus = parameters.ring_modulus();
        let basis = parameters.key_switching_basis();
        let gaussian = parameters.noise_distribution();

        let lwe_secret_key = secret_key_pack.lwe_secret_key().lift(modulus);
        let z = secret_key_pack.ring_secret_key().data();

        let b = basis.basis() as usize;
        let d = basis.decompose_len();
        let powers = basis.powers(modulus);

        let key = generate_in_parallel(ring_dimension * b * d, rng, |index, rng| {
            let (i, v, j) = (index / (b * d), (index / d) % b, index % d);
            let message = (v as u128 * powers[j] as u128 % modulus.value() as u128
                * z[i] as u128
                % modulus.value() as u128) as u64;
            Ok::<_, FHECoreError>(LweCiphertext::encrypt(
                message,
                &lwe_secret_key,
                modulus,
                gaussian,
                rng,
            ))
        })?;

        tracing::debug!(lwe = key.len(), "generated key switching key");

        Ok(Self {
            lwe_dimension,
            ring_dimension,
            modulus,
            basis,
            key,
        })
    }

    /// Returns the output dimension of this [`KeySwitchingKey`].
    #[inline]
    pub fn lwe_dimension(&self) -> usize {
        self.lwe_dimension
    }

    /// Returns the number of LWE ciphertexts held.
    #[inline]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Returns `true` if the key holds no LWE ciphertext.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Performs key switching.
    ///
    /// Starting from `(0, b)`, every coordinate `a_i` is decomposed in base `B_ks` and
    /// the entry matching `(i, digit, position)` is subtracted, which removes `<a, z>`
    /// and leaves `b - <a, z>` encrypted under the LWE secret.
    pub fn key_switch(&self, ciphertext: &LweCiphertext) -> Result<LweCiphertext, FHECoreError> {
        if ciphertext.dimension() != self.ring_dimension {
            return Err(FHECoreError::CiphertextDimensionMismatch {
                expected: self.ring_dimension,
                found: ciphertext.dimension(),
            });
        }
        if ciphertext.modulus() != self.modulus {
            return Err(FHECoreError::CiphertextModulusMismatch {
                expected: self.modulus.value(),
                found: ciphertext.modulus().value(),
            });
        }

        let b = self.basis.basis() as usize;
        let d = self.basis.decompose_len();
        let mut digits = vec![0; d];

        let mut acc =
            LweCiphertext::new(vec![0; self.lwe_dimension], ciphertext.b(), self.modulus);
        for (i, &a_i) in ciphertext.a().iter().enumerate() {
            self.basis.decompose_value_into(a_i, &mut digits);
            for (j, &v) in digits.iter().enumerate() {
                acc.sub_reduce_assign_component_wise(&self.key[(i * b + v as usize) * d + j])?;
            }
        }
        Ok(acc)
    }
}
