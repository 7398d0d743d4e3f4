#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Modular integers and negacyclic polynomial arithmetic over `Z_q[x]/(x^N + 1)`.

pub mod decompose;
pub mod error;
pub mod modulus;
pub mod polynomial;
pub mod random;
pub mod reduce;

pub use decompose::Basis;
pub use error::AlgebraError;
pub use modulus::Modulus;
pub use polynomial::Polynomial;
