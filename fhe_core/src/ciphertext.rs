use lattice::{Lwe, Rlwe};

/// LWE ciphertext. Fresh ciphertexts live mod `q`, bootstrapped ones mod `Q` or `q`.
pub type LweCiphertext = Lwe;

/// RLWE ciphertext mod `Q`, the blind rotation accumulator.
pub type RlweCiphertext = Rlwe;
