//! utility

use rand::{CryptoRng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

/// NOT
#[inline]
pub const fn not(a: bool) -> bool {
    !a
}

/// AND
#[inline]
pub const fn and(a: bool, b: bool) -> bool {
    a & b
}

/// NAND
#[inline]
pub const fn nand(a: bool, b: bool) -> bool {
    not(and(a, b))
}

/// OR
#[inline]
pub const fn or(a: bool, b: bool) -> bool {
    a | b
}

/// NOR
#[inline]
pub const fn nor(a: bool, b: bool) -> bool {
    not(or(a, b))
}

/// XOR
#[inline]
pub const fn xor(a: bool, b: bool) -> bool {
    a ^ b
}

/// XNOR
#[inline]
pub const fn xnor(a: bool, b: bool) -> bool {
    not(xor(a, b))
}

/// Runs `task(index, rng)` for every index in `0..count` on the rayon pool.
///
/// Every task gets its own [`ChaCha20Rng`], seeded from `rng` before dispatch, so the
/// output depends only on the caller's random stream. Results come back in index
/// order; if any task fails, the whole call fails and no partial output is returned.
pub fn generate_in_parallel<T, E, F, R>(count: usize, rng: &mut R, task: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(usize, &mut ChaCha20Rng) -> Result<T, E> + Sync + Send,
    R: Rng + CryptoRng,
{
    let seeds: Vec<<ChaCha20Rng as SeedableRng>::Seed> = (0..count).map(|_| rng.gen()).collect();

    seeds
        .into_par_iter()
        .enumerate()
        .map(|(index, seed)| {
            let mut task_rng = ChaCha20Rng::from_seed(seed);
            task(index, &mut task_rng)
        })
        .collect()
}
