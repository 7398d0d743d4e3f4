use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use itertools::izip;

use crate::reduce::*;
use crate::AlgebraError;

use super::{negacyclic_mul, Polynomial};

impl Polynomial {
    /// Adds `rhs` to `self`, checking dimension and modulus first.
    #[inline]
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.check_compatible(rhs)?;
        let mut res = self.clone();
        res.add_reduce_component_wise(rhs);
        Ok(res)
    }

    /// Subtracts `rhs` from `self`, checking dimension and modulus first.
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.check_compatible(rhs)?;
        let mut res = self.clone();
        res.sub_reduce_component_wise(rhs);
        Ok(res)
    }

    /// Multiplies `self` by `rhs` in the negacyclic ring, checking dimension and modulus first.
    #[inline]
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.check_compatible(rhs)?;
        Ok(Self::from_reduced(
            negacyclic_mul(self.data(), rhs.data(), self.modulus()),
            self.modulus(),
        ))
    }

    /// Multiplies every coefficient by `scalar`.
    #[inline]
    pub fn mul_scalar(&self, scalar: u64) -> Self {
        let mut res = self.clone();
        res.mul_scalar_assign(scalar);
        res
    }

    /// Multiplies every coefficient by `scalar` in place.
    #[inline]
    pub fn mul_scalar_assign(&mut self, scalar: u64) {
        let modulus = self.modulus();
        let scalar = modulus.reduce(scalar);
        self.iter_mut()
            .for_each(|v| modulus.reduce_mul_assign(v, scalar));
    }

    /// Performs `self = self + rhs` coefficient by coefficient.
    #[inline]
    fn add_reduce_component_wise(&mut self, rhs: &Self) {
        let modulus = self.modulus();
        izip!(self.iter_mut(), rhs.iter()).for_each(|(a, &b)| modulus.reduce_add_assign(a, b));
    }

    /// Performs `self = self - rhs` coefficient by coefficient.
    #[inline]
    fn sub_reduce_component_wise(&mut self, rhs: &Self) {
        let modulus = self.modulus();
        izip!(self.iter_mut(), rhs.iter()).for_each(|(a, &b)| modulus.reduce_sub_assign(a, b));
    }

    #[inline]
    fn assert_compatible(&self, rhs: &Self, op: &str) {
        if let Err(err) = self.check_compatible(rhs) {
            panic!("polynomial {op}: {err}");
        }
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    /// # Panics
    ///
    /// Panics if the operands differ in dimension or modulus.
    #[inline]
    fn add_assign(&mut self, rhs: &Polynomial) {
        self.assert_compatible(rhs, "addition");
        self.add_reduce_component_wise(rhs);
    }
}

impl AddAssign<Polynomial> for Polynomial {
    #[inline]
    fn add_assign(&mut self, rhs: Polynomial) {
        AddAssign::add_assign(self, &rhs);
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(mut self, rhs: &Polynomial) -> Polynomial {
        self += rhs;
        self
    }
}

impl Add<Polynomial> for Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(mut self, rhs: Polynomial) -> Polynomial {
        self += &rhs;
        self
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.clone() + rhs
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    /// # Panics
    ///
    /// Panics if the operands differ in dimension or modulus.
    #[inline]
    fn sub_assign(&mut self, rhs: &Polynomial) {
        self.assert_compatible(rhs, "subtraction");
        self.sub_reduce_component_wise(rhs);
    }
}

impl SubAssign<Polynomial> for Polynomial {
    #[inline]
    fn sub_assign(&mut self, rhs: Polynomial) {
        SubAssign::sub_assign(self, &rhs);
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(mut self, rhs: &Polynomial) -> Polynomial {
        self -= rhs;
        self
    }
}

impl Sub<Polynomial> for Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(mut self, rhs: Polynomial) -> Polynomial {
        self -= &rhs;
        self
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.clone() - rhs
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// # Panics
    ///
    /// Panics if the operands differ in dimension or modulus.
    #[inline]
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.assert_compatible(rhs, "multiplication");
        Polynomial::from_reduced(
            negacyclic_mul(self.data(), rhs.data(), self.modulus()),
            self.modulus(),
        )
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Polynomial;

    #[inline]
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        &self * rhs
    }
}

impl Mul<Polynomial> for Polynomial {
    type Output = Polynomial;

    #[inline]
    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    #[inline]
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = &*self * rhs;
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    #[inline]
    fn neg(mut self) -> Polynomial {
        let modulus = self.modulus();
        self.iter_mut().for_each(|v| modulus.reduce_neg_assign(v));
        self
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn neg(self) -> Polynomial {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use crate::Modulus;

    use super::*;

    const N: usize = 64;

    fn modulus() -> Modulus {
        Modulus::new(132120577).unwrap()
    }

    #[test]
    fn test_ring_laws() {
        let mut rng = thread_rng();
        let m = modulus();
        let a = Polynomial::random(N, m, &mut rng);
        let b = Polynomial::random(N, m, &mut rng);
        let c = Polynomial::random(N, m, &mut rng);

        assert_eq!(&a + &b, &b + &a);
        assert_eq!((&a + &b) + &c, &a + &(&b + &c));
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        assert_eq!(&a * &b, &b * &a);
        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        assert_eq!(&a * &Polynomial::one(N, m), a);
        assert_eq!(&a - &a, Polynomial::zero(N, m));
        assert_eq!(&a + &(-&a), Polynomial::zero(N, m));
    }

    #[test]
    fn test_negacyclic_wrap() {
        let m = Modulus::new(17).unwrap();
        // x^(N-1) * x = x^N = -1
        let x = Polynomial::monomial(1, N, m);
        let top = Polynomial::monomial(N - 1, N, m);
        assert_eq!(&x * &top, -Polynomial::one(N, m));
        // x^(2N) = 1
        assert_eq!(Polynomial::monomial(2 * N, N, m), Polynomial::one(N, m));
        assert_eq!(
            Polynomial::monomial(N + 3, N, m),
            -Polynomial::monomial(3, N, m)
        );
    }

    #[test]
    fn test_mul_small() {
        let m = Modulus::new(97).unwrap();
        // (1 + 2x + 3x^2 + 4x^3)(5 + 6x) mod (x^4 + 1)
        let a = Polynomial::new(vec![1, 2, 3, 4], m).unwrap();
        let b = Polynomial::new(vec![5, 6, 0, 0], m).unwrap();
        // 5 + 16x + 27x^2 + 38x^3 + 24x^4 = (5 - 24) + 16x + 27x^2 + 38x^3
        let expect = Polynomial::from_signed(&[-19, 16, 27, 38], m).unwrap();
        assert_eq!(&a * &b, expect);
    }

    #[test]
    fn test_mul_scalar() {
        let m = Modulus::new(97).unwrap();
        let a = Polynomial::new(vec![1, 50, 96, 0], m).unwrap();
        assert_eq!(a.mul_scalar(2), Polynomial::new(vec![2, 3, 95, 0], m).unwrap());
        assert_eq!(
            a.mul_scalar(5),
            &a * &Polynomial::constant(5, 4, m)
        );
    }

    #[test]
    fn test_checked_mismatch() {
        let m = Modulus::new(97).unwrap();
        let a = Polynomial::zero(4, m);
        let b = Polynomial::zero(8, m);
        let c = Polynomial::zero(4, Modulus::new(89).unwrap());
        assert_eq!(
            a.checked_add(&b),
            Err(AlgebraError::DimensionMismatch { lhs: 4, rhs: 8 })
        );
        assert_eq!(
            a.checked_mul(&c),
            Err(AlgebraError::ModulusMismatch { lhs: 97, rhs: 89 })
        );
        assert!(a.checked_sub(&a).is_ok());
        assert_eq!(
            Polynomial::new(vec![0; 6], m),
            Err(AlgebraError::DimensionNotPowerOfTwo(6))
        );
    }

    #[test]
    #[should_panic]
    fn test_operator_mismatch_panics() {
        let m = Modulus::new(97).unwrap();
        let _ = &Polynomial::zero(4, m) + &Polynomial::zero(8, m);
    }
}
