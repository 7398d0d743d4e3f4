use std::fmt;
use std::str::FromStr;

use algebra::random::DiscreteGaussian;
use algebra::{Basis, Modulus};
use serde::{Deserialize, Serialize};

use crate::FHECoreError;

/// The distribution of the LWE and ring secret keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecretKeyType {
    /// Rounded gaussian coefficients.
    #[default]
    Gaussian,
    /// Coefficients drawn uniformly from `{0, 1}`.
    Binary,
}

impl FromStr for SecretKeyType {
    type Err = FHECoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gaussian" => Ok(Self::Gaussian),
            "Binary" => Ok(Self::Binary),
            _ => Err(FHECoreError::UnknownSecretKeyType(s.to_string())),
        }
    }
}

impl fmt::Display for SecretKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gaussian => f.write_str("Gaussian"),
            Self::Binary => f.write_str("Binary"),
        }
    }
}

/// The blind rotation algorithm.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlindRotationType {
    /// One RGSW key per secret coordinate, digit value and digit position,
    /// each encrypting a monomial.
    #[default]
    DM,
    /// One RGSW key per secret coordinate, encrypting the secret bit. Binary secrets only.
    CGGI,
}

impl FromStr for BlindRotationType {
    type Err = FHECoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DM" => Ok(Self::DM),
            "CGGI" => Ok(Self::CGGI),
            _ => Err(FHECoreError::UnknownBlindRotationType(s.to_string())),
        }
    }
}

impl fmt::Display for BlindRotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DM => f.write_str("DM"),
            Self::CGGI => f.write_str("CGGI"),
        }
    }
}

/// The parameters of the fully homomorphic encryption scheme.
///
/// This type is used for setting some default Parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstParameters {
    /// LWE vector dimension, refers to **`n`** in the paper.
    pub lwe_dimension: usize,
    /// LWE cipher modulus, refers to **`q`** in the paper. Must equal `2N`.
    pub lwe_modulus: u64,
    /// Ring polynomial dimension, refers to **`N`** in the paper.
    pub ring_dimension: usize,
    /// Ring polynomial modulus, refers to **`Q`** in the paper.
    pub ring_modulus: u64,
    /// LWE and ring secret key distribution.
    pub secret_key_type: SecretKeyType,
    /// Standard deviation of gaussian secret keys.
    pub secret_std_dev: f64,
    /// Standard deviation of every encryption noise.
    pub noise_std_dev: f64,
    /// Gadget basis **`B_gd`**, used for the blind rotation keys.
    pub blind_rotation_basis: u64,
    /// Key switching basis **`B_ks`**.
    pub key_switching_basis: u64,
    /// The blind rotation algorithm.
    pub blind_rotation_type: BlindRotationType,
    /// Switch bootstrapped ciphertexts from `Q` back to `q`.
    pub modulus_switch: bool,
}

/// Parameters for FHE, validated and with every derived basis precomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ConstParameters", into = "ConstParameters")]
pub struct Parameters {
    lwe_dimension: usize,
    lwe_modulus: Modulus,
    ring_dimension: usize,
    ring_modulus: Modulus,
    secret_key_type: SecretKeyType,
    secret_distribution: DiscreteGaussian,
    noise_distribution: DiscreteGaussian,
    /// `B_gd` over `q`, decomposing the mask coordinates.
    mask_basis: Basis,
    /// `B_gd` over `Q`, decomposing the accumulator.
    blind_rotation_basis: Basis,
    /// `B_ks` over `Q`.
    key_switching_basis: Basis,
    blind_rotation_type: BlindRotationType,
    modulus_switch: bool,
}

impl Parameters {
    /// Create a new Parameter instance.
    pub fn new(params: ConstParameters) -> Result<Self, FHECoreError> {
        let ring_dimension = params.ring_dimension;

        if params.lwe_dimension == 0 {
            return Err(FHECoreError::LweDimensionUnValid(params.lwe_dimension));
        }

        // N = 2^i
        if ring_dimension < 2 || !ring_dimension.is_power_of_two() {
            return Err(FHECoreError::RingDimensionUnValid(ring_dimension));
        }

        // q = 2N
        if params.lwe_modulus != 2 * ring_dimension as u64 {
            return Err(FHECoreError::LweModulusRingDimensionNotCompatible {
                lwe_modulus: params.lwe_modulus,
                ring_dimension,
            });
        }

        let lwe_modulus = Modulus::new(params.lwe_modulus)?;
        let ring_modulus = Modulus::new(params.ring_modulus)?;
        if ring_modulus.value() <= lwe_modulus.value() {
            return Err(FHECoreError::RingModulusUnValid {
                ring_modulus: ring_modulus.value(),
                lwe_modulus: lwe_modulus.value(),
            });
        }

        if params.blind_rotation_type == BlindRotationType::CGGI
            && params.secret_key_type != SecretKeyType::Binary
        {
            return Err(FHECoreError::SecretKeyTypeNotSupported {
                blind_rotation_type: params.blind_rotation_type,
                secret_key_type: params.secret_key_type,
            });
        }

        let secret_distribution = DiscreteGaussian::new(params.secret_std_dev)
            .map_err(|_| FHECoreError::StdDevUnValid(params.secret_std_dev))?;
        let noise_distribution = DiscreteGaussian::new(params.noise_std_dev)
            .map_err(|_| FHECoreError::StdDevUnValid(params.noise_std_dev))?;

        Ok(Self {
            lwe_dimension: params.lwe_dimension,
            lwe_modulus,
            ring_dimension,
            ring_modulus,
            secret_key_type: params.secret_key_type,
            secret_distribution,
            noise_distribution,
            mask_basis: Basis::new(params.blind_rotation_basis, lwe_modulus)?,
            blind_rotation_basis: Basis::new(params.blind_rotation_basis, ring_modulus)?,
            key_switching_basis: Basis::new(params.key_switching_basis, ring_modulus)?,
            blind_rotation_type: params.blind_rotation_type,
            modulus_switch: params.modulus_switch,
        })
    }

    /// Returns the lwe dimension of this [`Parameters`], refers to **`n`** in the paper.
    #[inline]
    pub fn lwe_dimension(&self) -> usize {
        self.lwe_dimension
    }

    /// Returns the lwe modulus of this [`Parameters`], refers to **`q`** in the paper.
    #[inline]
    pub fn lwe_modulus(&self) -> Modulus {
        self.lwe_modulus
    }

    /// Returns the ring dimension of this [`Parameters`], refers to **`N`** in the paper.
    #[inline]
    pub fn ring_dimension(&self) -> usize {
        self.ring_dimension
    }

    /// Returns the ring modulus of this [`Parameters`], refers to **`Q`** in the paper.
    #[inline]
    pub fn ring_modulus(&self) -> Modulus {
        self.ring_modulus
    }

    /// Returns the secret key distribution type of this [`Parameters`].
    #[inline]
    pub fn secret_key_type(&self) -> SecretKeyType {
        self.secret_key_type
    }

    /// Gets the distribution of gaussian secret keys.
    #[inline]
    pub fn secret_distribution(&self) -> &DiscreteGaussian {
        &self.secret_distribution
    }

    /// Gets the encryption noise distribution.
    #[inline]
    pub fn noise_distribution(&self) -> &DiscreteGaussian {
        &self.noise_distribution
    }

    /// Returns the basis decomposing mask coordinates mod `q`, with **`d_g`** digits.
    #[inline]
    pub fn mask_basis(&self) -> Basis {
        self.mask_basis
    }

    /// Returns the gadget basis of this [`Parameters`],
    /// which acts as the decompose basis for `Q` used for the blind rotation accumulator.
    #[inline]
    pub fn blind_rotation_basis(&self) -> Basis {
        self.blind_rotation_basis
    }

    /// Returns the key switching basis of this [`Parameters`],
    /// which acts as the decompose basis for `Q` used for key switching, with **`d_ks`** digits.
    #[inline]
    pub fn key_switching_basis(&self) -> Basis {
        self.key_switching_basis
    }

    /// Returns the blind rotation algorithm of this [`Parameters`].
    #[inline]
    pub fn blind_rotation_type(&self) -> BlindRotationType {
        self.blind_rotation_type
    }

    /// Returns `true` if bootstrapped ciphertexts are switched back to `q`.
    #[inline]
    pub fn modulus_switch(&self) -> bool {
        self.modulus_switch
    }
}

impl TryFrom<ConstParameters> for Parameters {
    type Error = FHECoreError;

    #[inline]
    fn try_from(params: ConstParameters) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl From<Parameters> for ConstParameters {
    fn from(params: Parameters) -> Self {
        Self {
            lwe_dimension: params.lwe_dimension,
            lwe_modulus: params.lwe_modulus.value(),
            ring_dimension: params.ring_dimension,
            ring_modulus: params.ring_modulus.value(),
            secret_key_type: params.secret_key_type,
            secret_std_dev: params.secret_distribution.std_dev(),
            noise_std_dev: params.noise_distribution.std_dev(),
            blind_rotation_basis: params.blind_rotation_basis.basis(),
            key_switching_basis: params.key_switching_basis.basis(),
            blind_rotation_type: params.blind_rotation_type,
            modulus_switch: params.modulus_switch,
        }
    }
}

#[cfg(test)]
mod tests {
    use algebra::AlgebraError;

    use super::*;

    const PARAMS: ConstParameters = ConstParameters {
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

    #[test]
    fn test_derived_digits() {
        let params = Parameters::new(PARAMS).unwrap();
        assert_eq!(params.mask_basis().decompose_len(), 2);
        assert_eq!(params.blind_rotation_basis().decompose_len(), 6);
        assert_eq!(params.key_switching_basis().decompose_len(), 6);
    }

    #[test]
    fn test_rejects_invalid() {
        let check = |params: ConstParameters, err: FHECoreError| {
            assert_eq!(Parameters::new(params).unwrap_err(), err);
        };

        check(
            ConstParameters {
                lwe_modulus: 512,
                ..PARAMS
            },
            FHECoreError::LweModulusRingDimensionNotCompatible {
                lwe_modulus: 512,
                ring_dimension: 512,
            },
        );
        check(
            ConstParameters {
                ring_dimension: 500,
                lwe_modulus: 1000,
                ..PARAMS
            },
            FHECoreError::RingDimensionUnValid(500),
        );
        check(
            ConstParameters {
                lwe_dimension: 0,
                ..PARAMS
            },
            FHECoreError::LweDimensionUnValid(0),
        );
        check(
            ConstParameters {
                blind_rotation_type: BlindRotationType::CGGI,
                ..PARAMS
            },
            FHECoreError::SecretKeyTypeNotSupported {
                blind_rotation_type: BlindRotationType::CGGI,
                secret_key_type: SecretKeyType::Gaussian,
            },
        );
        check(
            ConstParameters {
                ring_modulus: 1000,
                ..PARAMS
            },
            FHECoreError::RingModulusUnValid {
                ring_modulus: 1000,
                lwe_modulus: 1024,
            },
        );
        check(
            ConstParameters {
                ring_modulus: 1 << 40,
                ..PARAMS
            },
            FHECoreError::Algebra(AlgebraError::InvalidModulus(1 << 40)),
        );
        check(
            ConstParameters {
                key_switching_basis: 1,
                ..PARAMS
            },
            FHECoreError::Algebra(AlgebraError::InvalidBasis(1)),
        );
        assert!(matches!(
            Parameters::new(ConstParameters {
                noise_std_dev: -1.0,
                ..PARAMS
            }),
            Err(FHECoreError::StdDevUnValid(_))
        ));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("Binary".parse::<SecretKeyType>(), Ok(SecretKeyType::Binary));
        assert_eq!("Gaussian".parse::<SecretKeyType>(), Ok(SecretKeyType::Gaussian));
        assert_eq!(
            "Ternary".parse::<SecretKeyType>(),
            Err(FHECoreError::UnknownSecretKeyType("Ternary".into()))
        );
        assert_eq!("DM".parse::<BlindRotationType>(), Ok(BlindRotationType::DM));
        assert_eq!("CGGI".parse::<BlindRotationType>(), Ok(BlindRotationType::CGGI));
        assert!("LMKCDEY".parse::<BlindRotationType>().is_err());
    }

    #[test]
    fn test_const_parameters_round_trip() {
        let params = Parameters::new(PARAMS).unwrap();
        assert_eq!(ConstParameters::from(params), PARAMS);
    }
}
