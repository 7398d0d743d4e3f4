use crate::modulus::Modulus;

/// The modulo operation.
pub trait Reduce<T> {
    /// Output type.
    type Output;

    /// Calculates `value (mod modulus)` where `self` is modulus.
    fn reduce(self, value: T) -> Self::Output;
}

/// The modular addition.
pub trait ReduceAdd<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a + b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_add(self, a: T, b: B) -> Self::Output;
}

/// The modular addition assignment.
pub trait ReduceAddAssign<T, B = T> {
    /// Calculates `a += b (mod modulus)` where `self` is modulus.
    fn reduce_add_assign(self, a: &mut T, b: B);
}

/// The modular subtraction.
pub trait ReduceSub<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a - b (mod modulus)` where `self` is modulus.
    ///
    /// # Correctness
    ///
    /// - `a < modulus`
    /// - `b < modulus`
    fn reduce_sub(self, a: T, b: B) -> Self::Output;
}

/// The modular subtraction assignment.
pub trait ReduceSubAssign<T, B = T> {
    /// Calculates `a -= b (mod modulus)` where `self` is modulus.
    fn reduce_sub_assign(self, a: &mut T, b: B);
}

/// The modular negation.
pub trait ReduceNeg<T> {
    /// Output type.
    type Output;

    /// Calculates `-value (mod modulus)` where `self` is modulus.
    fn reduce_neg(self, value: T) -> Self::Output;
}

/// The modular negation assignment.
pub trait ReduceNegAssign<T> {
    /// Calculates `-value (mod modulus)` where `self` is modulus.
    fn reduce_neg_assign(self, value: &mut T);
}

/// The modular multiplication.
pub trait ReduceMul<T, B = T> {
    /// Output type.
    type Output;

    /// Calculates `a * b (mod modulus)` where `self` is modulus.
    fn reduce_mul(self, a: T, b: B) -> Self::Output;
}

/// The modular multiplication assignment.
pub trait ReduceMulAssign<T, B = T> {
    /// Calculates `a *= b (mod modulus)` where `self` is modulus.
    fn reduce_mul_assign(self, a: &mut T, b: B);
}

/// The modular multiply-add.
pub trait ReduceMulAdd<T> {
    /// Output type.
    type Output;

    /// Calculates `a * b + c (mod modulus)` where `self` is modulus.
    fn reduce_mul_add(self, a: T, b: T, c: T) -> Self::Output;
}

/// The modular inner product.
pub trait ReduceDotProduct<T> {
    /// Output type.
    type Output;

    /// Calculates `∑ a_i * b_i (mod modulus)` where `self` is modulus.
    fn reduce_dot_product(self, a: &[T], b: &[T]) -> Self::Output;
}

impl Reduce<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: u64) -> u64 {
        value % self.value()
    }
}

impl Reduce<u128> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: u128) -> u64 {
        (value % self.value() as u128) as u64
    }
}

impl Reduce<i64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce(self, value: i64) -> u64 {
        value.rem_euclid(self.value() as i64) as u64
    }
}

impl ReduceAdd<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce_add(self, a: u64, b: u64) -> u64 {
        let sum = a + b;
        if sum >= self.value() {
            sum - self.value()
        } else {
            sum
        }
    }
}

impl ReduceAddAssign<u64> for Modulus {
    #[inline]
    fn reduce_add_assign(self, a: &mut u64, b: u64) {
        *a = self.reduce_add(*a, b);
    }
}

impl ReduceSub<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce_sub(self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            self.value() - b + a
        }
    }
}

impl ReduceSubAssign<u64> for Modulus {
    #[inline]
    fn reduce_sub_assign(self, a: &mut u64, b: u64) {
        *a = self.reduce_sub(*a, b);
    }
}

impl ReduceNeg<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce_neg(self, value: u64) -> u64 {
        if value == 0 {
            0
        } else {
            self.value() - value
        }
    }
}

impl ReduceNegAssign<u64> for Modulus {
    #[inline]
    fn reduce_neg_assign(self, value: &mut u64) {
        *value = self.reduce_neg(*value);
    }
}

impl ReduceMul<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce_mul(self, a: u64, b: u64) -> u64 {
        self.reduce(a as u128 * b as u128)
    }
}

impl ReduceMulAssign<u64> for Modulus {
    #[inline]
    fn reduce_mul_assign(self, a: &mut u64, b: u64) {
        *a = self.reduce_mul(*a, b);
    }
}

impl ReduceMulAdd<u64> for Modulus {
    type Output = u64;

    #[inline]
    fn reduce_mul_add(self, a: u64, b: u64, c: u64) -> u64 {
        self.reduce(a as u128 * b as u128 + c as u128)
    }
}

impl ReduceDotProduct<u64> for Modulus {
    type Output = u64;

    /// Products are accumulated in `u128` and reduced once at the end.
    #[inline]
    fn reduce_dot_product(self, a: &[u64], b: &[u64]) -> u64 {
        debug_assert_eq!(a.len(), b.len());
        let sum = a
            .iter()
            .zip(b)
            .fold(0u128, |acc, (&x, &y)| acc + x as u128 * y as u128);
        self.reduce(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_ops() {
        let m = Modulus::new(17).unwrap();
        assert_eq!(m.reduce(40u64), 6);
        assert_eq!(m.reduce(-1i64), 16);
        assert_eq!(m.reduce(-35i64), 16);
        assert_eq!(m.reduce_add(16, 5), 4);
        assert_eq!(m.reduce_sub(3, 5), 15);
        assert_eq!(m.reduce_neg(0), 0);
        assert_eq!(m.reduce_neg(4), 13);
        assert_eq!(m.reduce_mul(16, 16), 1);
        assert_eq!(m.reduce_mul_add(4, 5, 16), 2);
        assert_eq!(m.reduce_dot_product(&[1, 2, 3], &[16, 16, 16]), 11);
    }

    #[test]
    fn test_reduce_large_modulus() {
        let m = Modulus::new(1 << 32).unwrap();
        let a = (1u64 << 32) - 1;
        assert_eq!(m.reduce_mul(a, a), 1);
        assert_eq!(m.reduce_add(a, a), a - 1);
    }
}
