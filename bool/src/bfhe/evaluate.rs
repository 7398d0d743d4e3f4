use fhe_core::{
    encode, lwe_modulus_switch, BlindRotation, BlindRotationKey, KeySwitchingKey, LweCiphertext,
    ModulusSwitchRoundMethod, Parameters, RlwePublicKey, SecretKeyPack,
};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::{FHEError, Gate};

/// The evaluation key of the homomorphic encryption scheme.
///
/// Generated once from a [`SecretKeyPack`] and read-only afterwards, so one key can serve
/// any number of concurrent gate evaluations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationKey {
    /// Blind rotation key.
    blind_rotation_key: BlindRotationKey,
    /// Key switching key.
    key_switching_key: KeySwitchingKey,
    /// Public key seeding the accumulator.
    public_key: RlwePublicKey,
    /// The parameters of the fully homomorphic encryption scheme.
    parameters: Parameters,
}

impl EvaluationKey {
    /// Creates a new [`EvaluationKey`] from the given [`SecretKeyPack`].
    #[tracing::instrument(skip_all, name = "evaluation_key")]
    pub fn new<R>(secret_key_pack: &SecretKeyPack, rng: &mut R) -> Result<Self, FHEError>
    where
        R: Rng + CryptoRng,
    {
        let parameters = secret_key_pack.parameters();

        let public_key = RlwePublicKey::new(
            secret_key_pack.ring_secret_key(),
            parameters.noise_distribution(),
            rng,
        );
        let blind_rotation_key = BlindRotationKey::generate(secret_key_pack, rng)?;
        let key_switching_key = KeySwitchingKey::generate(secret_key_pack, rng)?;

        tracing::debug!(
            blind_rotation_type = %blind_rotation_key.blind_rotation_type(),
            "generated evaluation key"
        );

        Ok(Self {
            blind_rotation_key,
            key_switching_key,
            public_key,
            parameters: parameters.clone(),
        })
    }

    /// Returns the parameters of this [`EvaluationKey`].
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the blind rotation key of this [`EvaluationKey`].
    #[inline]
    pub fn blind_rotation_key(&self) -> &BlindRotationKey {
        &self.blind_rotation_key
    }

    /// Returns the key switching key of this [`EvaluationKey`].
    #[inline]
    pub fn key_switching_key(&self) -> &KeySwitchingKey {
        &self.key_switching_key
    }

    /// Returns the public key of this [`EvaluationKey`].
    #[inline]
    pub fn public_key(&self) -> &RlwePublicKey {
        &self.public_key
    }

    /// Complete the bootstrapping operation with the combined LWE Ciphertext *`c`*
    /// and the step function of `gate`.
    ///
    /// The result lives mod `Q` with dimension `n`, or mod `q` when modulus switching is enabled.
    #[tracing::instrument(skip_all, fields(gate = %gate))]
    pub fn bootstrap(&self, c: &LweCiphertext, gate: Gate) -> Result<LweCiphertext, FHEError> {
        let parameters = self.parameters();
        let ring_modulus = parameters.ring_modulus();

        let lut = gate
            .accumulator(
                c.b(),
                parameters.lwe_modulus(),
                parameters.ring_dimension(),
                ring_modulus,
            )?;
        let acc = self.public_key.encrypt(&lut)?;

        let acc = self.blind_rotation_key.blind_rotate(acc, c.a())?;

        let mut extracted = acc.extract_lwe();
        extracted.add_to_body(ring_modulus.fraction(1, 8));

        let switched = self.key_switching_key.key_switch(&extracted)?;

        if parameters.modulus_switch() {
            Ok(lwe_modulus_switch(
                &switched,
                parameters.lwe_modulus(),
                ModulusSwitchRoundMethod::Round,
            ))
        } else {
            Ok(switched)
        }
    }
}

/// Evaluator
#[derive(Debug, Clone)]
pub struct Evaluator {
    ek: EvaluationKey,
}

impl From<EvaluationKey> for Evaluator {
    #[inline]
    fn from(ek: EvaluationKey) -> Self {
        Self { ek }
    }
}

impl Evaluator {
    /// Create a new instance.
    #[inline]
    pub fn new<R>(sk: &SecretKeyPack, rng: &mut R) -> Result<Self, FHEError>
    where
        R: Rng + CryptoRng,
    {
        Ok(Self {
            ek: EvaluationKey::new(sk, rng)?,
        })
    }

    /// Returns a reference to the parameters of this [`Evaluator`].
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        self.ek.parameters()
    }

    /// Returns a reference to the evaluation key of this [`Evaluator`].
    #[inline]
    pub fn evaluation_key(&self) -> &EvaluationKey {
        &self.ek
    }

    fn check_input(&self, c: &LweCiphertext) -> Result<(), FHEError> {
        let parameters = self.parameters();
        if c.dimension() != parameters.lwe_dimension()
            || c.modulus() != parameters.lwe_modulus()
        {
            return Err(FHEError::CiphertextNotAccepted {
                dimension: c.dimension(),
                modulus: c.modulus().value(),
                expected_dimension: parameters.lwe_dimension(),
                expected_modulus: parameters.lwe_modulus().value(),
            });
        }
        Ok(())
    }

    /// Performs the homomorphic binary `gate`.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c0`, with message `a`.
    /// * Input: ciphertext `c1`, with message `b`.
    /// * Output: ciphertext with message `gate(a, b)`.
    ///
    /// Both inputs must have dimension `n` and modulus `q`.
    pub fn evaluate(
        &self,
        gate: Gate,
        c0: &LweCiphertext,
        c1: &LweCiphertext,
    ) -> Result<LweCiphertext, FHEError> {
        self.check_input(c0)?;
        self.check_input(c1)?;

        let mut combined = c0.clone().add_reduce_component_wise(c1)?;
        if gate.doubles_input() {
            combined.mul_scalar_reduce_assign(2);
        }

        self.ek.bootstrap(&combined, gate)
    }

    /// Performs the homomorphic not operation.
    ///
    /// # Arguments
    ///
    /// * Input: ciphertext `c`, with message `true`(resp. `false`).
    /// * Output: ciphertext with message `false`(resp. `true`).
    ///
    /// No bootstrapping happens, so the noise of `c` carries over unchanged. Works in
    /// whichever modulus `c` lives in.
    pub fn not(&self, c: &LweCiphertext) -> LweCiphertext {
        let mut neg = c.neg_reduce();
        neg.add_to_body(encode(true, c.modulus()));
        neg
    }

    /// Performs the homomorphic and operation.
    #[inline]
    pub fn and(&self, c0: &LweCiphertext, c1: &LweCiphertext) -> Result<LweCiphertext, FHEError> {
        self.evaluate(Gate::And, c0, c1)
    }

    /// Performs the homomorphic nand operation.
    #[inline]
    pub fn nand(&self, c0: &LweCiphertext, c1: &LweCiphertext) -> Result<LweCiphertext, FHEError> {
        self.evaluate(Gate::Nand, c0, c1)
    }

    /// Performs the homomorphic or operation.
    #[inline]
    pub fn or(&self, c0: &LweCiphertext, c1: &LweCiphertext) -> Result<LweCiphertext, FHEError> {
        self.evaluate(Gate::Or, c0, c1)
    }

    /// Performs the homomorphic nor operation.
    #[inline]
    pub fn nor(&self, c0: &LweCiphertext, c1: &LweCiphertext) -> Result<LweCiphertext, FHEError> {
        self.evaluate(Gate::Nor, c0, c1)
    }

    /// Performs the homomorphic xor operation.
    #[inline]
    pub fn xor(&self, c0: &LweCiphertext, c1: &LweCiphertext) -> Result<LweCiphertext, FHEError> {
        self.evaluate(Gate::Xor, c0, c1)
    }

    /// Performs the homomorphic xnor operation.
    #[inline]
    pub fn xnor(&self, c0: &LweCiphertext, c1: &LweCiphertext) -> Result<LweCiphertext, FHEError> {
        self.evaluate(Gate::Xnor, c0, c1)
    }
}
