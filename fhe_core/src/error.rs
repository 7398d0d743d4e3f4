use algebra::AlgebraError;

use crate::{BlindRotationType, SecretKeyType};

/// Errors that may occur.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FHECoreError {
    /// Error that occurs when the given lwe dimension is not valid.
    #[error("LWE dimension {0} is not valid!")]
    LweDimensionUnValid(usize),
    /// Error that occurs when the given ring dimension is not valid.
    #[error("Ring dimension {0} is not valid!")]
    RingDimensionUnValid(usize),
    /// Error that occurs when the given lwe modulus is not `2N`.
    #[error("LWE modulus {lwe_modulus} is not compatible with ring dimension {ring_dimension}!")]
    LweModulusRingDimensionNotCompatible {
        /// LWE modulus
        lwe_modulus: u64,
        /// Ring dimension
        ring_dimension: usize,
    },
    /// Error that occurs when the ring modulus does not exceed the lwe modulus.
    #[error("Ring modulus {ring_modulus} must be larger than LWE modulus {lwe_modulus}!")]
    RingModulusUnValid {
        /// Ring modulus
        ring_modulus: u64,
        /// LWE modulus
        lwe_modulus: u64,
    },
    /// Error that occurs when a standard deviation is negative or not finite.
    #[error("Standard deviation {0} is not valid!")]
    StdDevUnValid(f64),
    /// Error that occurs when the blind rotation cannot handle the secret distribution.
    #[error("{blind_rotation_type} blind rotation does not support {secret_key_type} secret keys!")]
    SecretKeyTypeNotSupported {
        /// Requested blind rotation.
        blind_rotation_type: BlindRotationType,
        /// Requested secret distribution.
        secret_key_type: SecretKeyType,
    },
    /// Error that occurs when parsing an unknown secret distribution tag.
    #[error("Unknown secret key distribution `{0}`!")]
    UnknownSecretKeyType(String),
    /// Error that occurs when parsing an unknown blind rotation tag.
    #[error("Unknown blind rotation type `{0}`!")]
    UnknownBlindRotationType(String),
    /// Error that occurs when a ciphertext does not have the expected dimension.
    #[error("Ciphertext dimension {found} does not match the expected {expected}!")]
    CiphertextDimensionMismatch {
        /// Dimension required by the operation.
        expected: usize,
        /// Dimension supplied.
        found: usize,
    },
    /// Error that occurs when a ciphertext does not live in the expected modulus.
    #[error("Ciphertext modulus {found} does not match the expected {expected}!")]
    CiphertextModulusMismatch {
        /// Modulus required by the operation.
        expected: u64,
        /// Modulus supplied.
        found: u64,
    },
    /// Error that occurs in the underlying arithmetic.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
