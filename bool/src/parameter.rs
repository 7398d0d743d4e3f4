use fhe_core::{BlindRotationType, ConstParameters, Parameters, SecretKeyType};
use once_cell::sync::Lazy;

/// `N = 512`, `q = 1024`, `Q = 132120577` with `B_gd = 32`, so mask coordinates take two
/// digits. The LWE dimension is kept small; these parameters demonstrate correctness, not
/// security.
pub const CONST_DEFAULT_PARAMETERS: ConstParameters = ConstParameters {
    lwe_dimension: 16,
    lwe_modulus: 1024,
    ring_dimension: 512,
    ring_modulus: 132120577,
    secret_key_type: SecretKeyType::Gaussian,
    secret_std_dev: 3.2,
    noise_std_dev: 3.2,
    blind_rotation_basis: 32,
    key_switching_basis: 32,
    blind_rotation_type: BlindRotationType::DM,
    modulus_switch: false,
};

/// Toy parameters with DM blind rotation and gaussian secrets.
pub const CONST_TOY_DM_PARAMETERS: ConstParameters = ConstParameters {
    lwe_dimension: 16,
    lwe_modulus: 256,
    ring_dimension: 128,
    ring_modulus: 1032193,
    secret_key_type: SecretKeyType::Gaussian,
    secret_std_dev: 3.2,
    noise_std_dev: 3.2,
    blind_rotation_basis: 16,
    key_switching_basis: 16,
    blind_rotation_type: BlindRotationType::DM,
    modulus_switch: false,
};

/// Toy parameters with CGGI blind rotation and binary secrets.
pub const CONST_TOY_CGGI_PARAMETERS: ConstParameters = ConstParameters {
    secret_key_type: SecretKeyType::Binary,
    blind_rotation_type: BlindRotationType::CGGI,
    ..CONST_TOY_DM_PARAMETERS
};

/// Default Parameters
pub static DEFAULT_PARAMETERS: Lazy<Parameters> =
    Lazy::new(|| Parameters::new(CONST_DEFAULT_PARAMETERS).unwrap());

/// Toy DM Parameters
pub static TOY_DM_PARAMETERS: Lazy<Parameters> =
    Lazy::new(|| Parameters::new(CONST_TOY_DM_PARAMETERS).unwrap());

/// Toy CGGI Parameters
pub static TOY_CGGI_PARAMETERS: Lazy<Parameters> =
    Lazy::new(|| Parameters::new(CONST_TOY_CGGI_PARAMETERS).unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(DEFAULT_PARAMETERS.mask_basis().decompose_len(), 2);
        assert_eq!(DEFAULT_PARAMETERS.blind_rotation_basis().decompose_len(), 6);
        assert_eq!(DEFAULT_PARAMETERS.key_switching_basis().decompose_len(), 6);
        assert_eq!(TOY_DM_PARAMETERS.mask_basis().decompose_len(), 2);
        assert_eq!(TOY_DM_PARAMETERS.blind_rotation_basis().decompose_len(), 5);
        assert_eq!(
            TOY_CGGI_PARAMETERS.blind_rotation_type(),
            BlindRotationType::CGGI
        );
    }
}
