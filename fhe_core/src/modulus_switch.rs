use algebra::Modulus;

use crate::LweCiphertext;

/// Modulus Switch round method.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModulusSwitchRoundMethod {
    /// round, ties up
    #[default]
    Round,
    /// floor
    Floor,
    /// ceil
    Ceil,
}

/// Rescales a single value from `modulus_before` to `modulus_after`.
#[inline]
fn switch_value(
    value: u64,
    modulus_before: u64,
    modulus_after: u64,
    round_method: ModulusSwitchRoundMethod,
) -> u64 {
    let v = value as u128 * modulus_after as u128;
    let before = modulus_before as u128;
    let switched = match round_method {
        ModulusSwitchRoundMethod::Round => (2 * v + before) / (2 * before),
        ModulusSwitchRoundMethod::Floor => v / before,
        ModulusSwitchRoundMethod::Ceil => (v + before - 1) / before,
    };
    (switched % modulus_after as u128) as u64
}

/// Implementation of modulus switching.
///
/// Every coordinate `x` of `c` becomes `x * q' / q` rounded by `round_method`, reduced mod `q'`.
/// The rounding adds up to `1/2` per coordinate, so the noise of the result is
/// dominated by `(n + 1) / 2` times the secret magnitude.
pub fn lwe_modulus_switch(
    c: &LweCiphertext,
    modulus_after: Modulus,
    round_method: ModulusSwitchRoundMethod,
) -> LweCiphertext {
    let before = c.modulus().value();
    let after = modulus_after.value();
    let switch = |v: u64| switch_value(v, before, after, round_method);

    LweCiphertext::new(
        c.a().iter().copied().map(switch).collect(),
        switch(c.b()),
        modulus_after,
    )
}
