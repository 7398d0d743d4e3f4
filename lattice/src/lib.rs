#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Defines some lattice cryptographic structure.

mod gadget;
mod lwe;
mod rgsw;
mod rlwe;

pub use gadget::GadgetRlwe;
pub use lwe::Lwe;
pub use rgsw::Rgsw;
pub use rlwe::Rlwe;
