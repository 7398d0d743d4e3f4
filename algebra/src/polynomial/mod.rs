//! Negacyclic polynomials over `Z_m[x]/(x^N + 1)`.

use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use serde::{Deserialize, Serialize};

use crate::reduce::Reduce;
use crate::{AlgebraError, Modulus};

mod decompose;
mod mul;
mod ops;
mod random;

pub use mul::negacyclic_mul;

/// An element of the negacyclic ring `Z_m[x]/(x^N + 1)`.
///
/// The `i`-th entry of `data` is the coefficient of `x^i`, kept canonically reduced into `[0, m)`.
/// The dimension `N` is always a power of two.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial {
    data: Vec<u64>,
    modulus: Modulus,
}

impl Polynomial {
    /// Creates a new [`Polynomial`], reducing every coefficient into `[0, m)`.
    #[inline]
    pub fn new(data: Vec<u64>, modulus: Modulus) -> Result<Self, AlgebraError> {
        check_dimension(data.len())?;
        let mut data = data;
        data.iter_mut().for_each(|v| *v = modulus.reduce(*v));
        Ok(Self { data, modulus })
    }

    /// Creates a new [`Polynomial`] from signed coefficients.
    #[inline]
    pub fn from_signed(data: &[i64], modulus: Modulus) -> Result<Self, AlgebraError> {
        check_dimension(data.len())?;
        Ok(Self {
            data: data.iter().map(|&v| modulus.reduce(v)).collect(),
            modulus,
        })
    }

    /// Wraps already reduced coefficients whose length is a known power of two.
    #[inline]
    pub(crate) fn from_reduced(data: Vec<u64>, modulus: Modulus) -> Self {
        debug_assert!(data.len().is_power_of_two());
        debug_assert!(data.iter().all(|&v| v < modulus.value()));
        Self { data, modulus }
    }

    /// Creates the zero polynomial of dimension `n`.
    ///
    /// `n` is expected to be a power of two, see [`Polynomial::new`] for the checked path.
    #[inline]
    pub fn zero(n: usize, modulus: Modulus) -> Self {
        debug_assert!(n.is_power_of_two());
        Self {
            data: vec![0; n],
            modulus,
        }
    }

    /// Creates the constant polynomial `value`.
    #[inline]
    pub fn constant(value: u64, n: usize, modulus: Modulus) -> Self {
        let mut poly = Self::zero(n, modulus);
        poly.data[0] = modulus.reduce(value);
        poly
    }

    /// Creates the multiplicative identity.
    #[inline]
    pub fn one(n: usize, modulus: Modulus) -> Self {
        Self::constant(1, n, modulus)
    }

    /// Creates the signed monomial `x^exponent`, with the exponent taken mod `2N`.
    ///
    /// Since `x^N = -1`, an exponent `e` in `[N, 2N)` yields `-x^(e - N)`.
    #[inline]
    pub fn monomial(exponent: usize, n: usize, modulus: Modulus) -> Self {
        let e = exponent % (2 * n);
        let mut poly = Self::zero(n, modulus);
        if e < n {
            poly.data[e] = 1;
        } else {
            poly.data[e - n] = modulus.value() - 1;
        }
        poly
    }

    /// Returns the dimension `N` of this [`Polynomial`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Returns the modulus of this [`Polynomial`].
    #[inline]
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Returns a reference to the coefficients of this [`Polynomial`].
    #[inline]
    pub fn data(&self) -> &[u64] {
        &self.data
    }

    /// Drop self, and return the coefficients.
    #[inline]
    pub fn inner_data(self) -> Vec<u64> {
        self.data
    }

    /// Returns an iterator over the coefficients.
    #[inline]
    pub fn iter(&self) -> Iter<u64> {
        self.data.iter()
    }

    /// Returns an iterator that allows modifying each coefficient.
    ///
    /// Callers must keep every coefficient below the modulus.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<u64> {
        self.data.iter_mut()
    }

    /// Returns the coefficients lifted into `(-m/2, m/2]`.
    #[inline]
    pub fn centered(&self) -> Vec<i64> {
        self.data.iter().map(|&v| self.modulus.centered(v)).collect()
    }

    /// Returns `true` if every coefficient is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Checks that `self` and `other` share dimension and modulus.
    #[inline]
    pub fn check_compatible(&self, other: &Self) -> Result<(), AlgebraError> {
        if self.dimension() != other.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                lhs: self.dimension(),
                rhs: other.dimension(),
            });
        }
        if self.modulus != other.modulus {
            return Err(AlgebraError::ModulusMismatch {
                lhs: self.modulus.value(),
                rhs: other.modulus.value(),
            });
        }
        Ok(())
    }
}

impl Index<usize> for Polynomial {
    type Output = u64;

    #[inline]
    fn index(&self, index: usize) -> &u64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Polynomial {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u64 {
        &mut self.data[index]
    }
}

#[inline]
fn check_dimension(n: usize) -> Result<(), AlgebraError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(AlgebraError::DimensionNotPowerOfTwo(n))
    }
}
