use crate::reduce::{Reduce, ReduceSub};
use crate::Modulus;

/// Schoolbook negacyclic convolution of two coefficient slices of equal length `N`.
///
/// Coefficient `k` of the result collects `a_i * b_j` for `i + j = k` and subtracts
/// `a_i * b_j` for `i + j = k + N`, since `x^N = -1`.
/// Both sides are accumulated in `u128` and reduced once per coefficient.
pub fn negacyclic_mul(lhs: &[u64], rhs: &[u64], modulus: Modulus) -> Vec<u64> {
    let n = lhs.len();
    debug_assert_eq!(n, rhs.len());

    let mut positive = vec![0u128; n];
    let mut negative = vec![0u128; n];

    for (i, &a) in lhs.iter().enumerate() {
        if a == 0 {
            continue;
        }
        let a = a as u128;
        let (low, high) = rhs.split_at(n - i);
        for (acc, &b) in positive[i..].iter_mut().zip(low) {
            *acc += a * b as u128;
        }
        for (acc, &b) in negative[..i].iter_mut().zip(high) {
            *acc += a * b as u128;
        }
    }

    positive
        .into_iter()
        .zip(negative)
        .map(|(p, q)| modulus.reduce_sub(modulus.reduce(p), modulus.reduce(q)))
        .collect()
}
