#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Implementations of FHE core operations.

mod blind_rotation;
mod ciphertext;
mod error;
mod key_switch;
mod modulus_switch;
mod parameter;
mod plaintext;
mod public_key;
mod secret_key;
mod utils;

pub use blind_rotation::{
    BlindRotation, BlindRotationKey, CggiBlindRotationKey, DmBlindRotationKey,
};
pub use ciphertext::{LweCiphertext, RlweCiphertext};
pub use error::FHECoreError;
pub use key_switch::KeySwitchingKey;
pub use modulus_switch::{lwe_modulus_switch, ModulusSwitchRoundMethod};
pub use parameter::{BlindRotationType, ConstParameters, Parameters, SecretKeyType};
pub use plaintext::{decode, encode, noise};
pub use public_key::RlwePublicKey;
pub use secret_key::{LweSecretKey, RingSecretKey, SecretKeyPack};
pub use utils::*;
