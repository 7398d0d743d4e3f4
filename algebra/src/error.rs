//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error that occurs when the modulus is outside `[2, 2^32]`.
    #[error("Modulus {0} is not supported, it must lie in [2, 2^32]")]
    InvalidModulus(u64),
    /// Error that occurs when a decomposition basis is smaller than 2.
    #[error("Decomposition basis {0} is not valid")]
    InvalidBasis(u64),
    /// Error that occurs when a polynomial dimension is not a power of two.
    #[error("Polynomial dimension {0} is not a power of two")]
    DimensionNotPowerOfTwo(usize),
    /// Error that occurs when two operands have different dimensions.
    #[error("Dimension mismatch: {lhs} vs {rhs}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        lhs: usize,
        /// Dimension of the right operand.
        rhs: usize,
    },
    /// Error that occurs when two operands live in different moduli.
    #[error("Modulus mismatch: {lhs} vs {rhs}")]
    ModulusMismatch {
        /// Modulus of the left operand.
        lhs: u64,
        /// Modulus of the right operand.
        rhs: u64,
    },
    /// Error that occurs when a decomposition has an unexpected number of digits.
    #[error("Expected {expected} decomposition digits, found {found}")]
    DecomposeLengthMismatch {
        /// Length required by the basis.
        expected: usize,
        /// Length supplied.
        found: usize,
    },
    /// Error that occurs when fails to generate the distribution.
    #[error("Fail to generate the desired distribution.")]
    DistributionErr,
}
