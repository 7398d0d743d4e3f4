#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Bootstrapped binary gates over single-bit LWE ciphertexts.

pub mod bfhe;

mod decrypt;
mod encrypt;
mod error;
mod gate;
mod key_gen;
mod parameter;

pub use bfhe::{EvaluationKey, Evaluator};
pub use decrypt::Decryptor;
pub use encrypt::Encryptor;
pub use error::FHEError;
pub use gate::Gate;
pub use key_gen::KeyGen;
pub use parameter::{
    CONST_DEFAULT_PARAMETERS, CONST_TOY_CGGI_PARAMETERS, CONST_TOY_DM_PARAMETERS,
    DEFAULT_PARAMETERS, TOY_CGGI_PARAMETERS, TOY_DM_PARAMETERS,
};
