use algebra::AlgebraError;
use fhe_core::FHECoreError;
use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FHEError {
    /// Error that occurs when parsing an unknown gate tag.
    #[error("Unknown gate `{0}`!")]
    UnknownGate(String),
    /// Error that occurs when a binary gate receives a ciphertext outside `(n, q)`.
    #[error(
        "Ciphertext of dimension {dimension} modulo {modulus} is not accepted, \
         binary gates take dimension {expected_dimension} modulo {expected_modulus}!"
    )]
    CiphertextNotAccepted {
        /// Dimension of the supplied ciphertext.
        dimension: usize,
        /// Modulus of the supplied ciphertext.
        modulus: u64,
        /// LWE dimension **`n`**.
        expected_dimension: usize,
        /// LWE modulus **`q`**.
        expected_modulus: u64,
    },
    /// Error from the key material or the blind rotation.
    #[error(transparent)]
    Core(#[from] FHECoreError),
    /// Error from the ciphertext algebra.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
