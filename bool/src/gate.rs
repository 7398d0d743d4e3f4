use std::fmt;
use std::str::FromStr;

use algebra::reduce::ReduceNeg;
use algebra::{AlgebraError, Modulus, Polynomial};

use crate::FHEError;

/// Binary gates evaluated with one bootstrapping each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// `a & b`
    And,
    /// `!(a & b)`
    Nand,
    /// `a | b`
    Or,
    /// `!(a | b)`
    Nor,
    /// `a ^ b`
    Xor,
    /// `!(a ^ b)`
    Xnor,
}

/// A half-open arc `[lo, hi)` of `Z_q`, wrapping through `0` when `lo > hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    lo: u64,
    hi: u64,
}

impl Interval {
    #[inline]
    fn contains(self, x: u64) -> bool {
        if self.lo <= self.hi {
            x >= self.lo && x < self.hi
        } else {
            x >= self.lo || x < self.hi
        }
    }
}

impl Gate {
    /// Every binary gate.
    pub const ALL: [Gate; 6] = [
        Gate::And,
        Gate::Nand,
        Gate::Or,
        Gate::Nor,
        Gate::Xor,
        Gate::Xnor,
    ];

    /// Evaluates the gate in the clear.
    #[inline]
    pub const fn evaluate(self, a: bool, b: bool) -> bool {
        match self {
            Gate::And => fhe_core::and(a, b),
            Gate::Nand => fhe_core::nand(a, b),
            Gate::Or => fhe_core::or(a, b),
            Gate::Nor => fhe_core::nor(a, b),
            Gate::Xor => fhe_core::xor(a, b),
            Gate::Xnor => fhe_core::xnor(a, b),
        }
    }

    /// Whether the sum of the inputs is doubled before bootstrapping.
    #[inline]
    pub const fn doubles_input(self) -> bool {
        matches!(self, Gate::Xor | Gate::Xnor)
    }

    /// Interval boundaries in eighths of `q`: `+Q/8` on the first arc, `-Q/8` on the second.
    const fn boundaries(self) -> [i64; 4] {
        match self {
            Gate::And => [3, 7, -1, 3],
            Gate::Nand => [-1, 3, 3, 7],
            Gate::Or => [1, 5, -3, 1],
            Gate::Nor => [-3, 1, 1, 5],
            Gate::Xor => [2, 6, -2, 2],
            Gate::Xnor => [-2, 2, 2, 6],
        }
    }

    fn intervals(self, lwe_modulus: Modulus) -> (Interval, Interval) {
        let [p0, p1, n0, n1] = self.boundaries().map(|v| lwe_modulus.fraction(v, 8));
        (Interval { lo: p0, hi: p1 }, Interval { lo: n0, hi: n1 })
    }

    /// Builds the accumulator polynomial for a combined ciphertext with body `body`.
    ///
    /// Walking `b` down from `body` one step per coefficient, coefficient `i` is `+Q/8` when
    /// `body - i - 1 (mod q)` falls on the first arc and `-Q/8` when it falls on the second.
    /// Rotating by `X^{-<a, s>}` then brings the value for the phase `b - <a, s>` to the
    /// constant term. The two arcs are half a turn apart with opposite signs, which is the
    /// negacyclic symmetry `X^N = -1` requires, since only `q/2 = N` positions are stored.
    pub fn accumulator(
        self,
        body: u64,
        lwe_modulus: Modulus,
        ring_dimension: usize,
        ring_modulus: Modulus,
    ) -> Result<Polynomial, AlgebraError> {
        let (positive, negative) = self.intervals(lwe_modulus);
        let q = lwe_modulus.value();
        let q_div_8 = ring_modulus.fraction(1, 8);
        let neg_q_div_8 = ring_modulus.reduce_neg(q_div_8);

        let mut b = body % q;
        let data = (0..ring_dimension)
            .map(|_| {
                b = (b + q - 1) % q;
                if negative.contains(b) {
                    neg_q_div_8
                } else if positive.contains(b) {
                    q_div_8
                } else {
                    0
                }
            })
            .collect();

        Polynomial::new(data, ring_modulus)
    }
}

impl FromStr for Gate {
    type Err = FHEError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(Gate::And),
            "NAND" => Ok(Gate::Nand),
            "OR" => Ok(Gate::Or),
            "NOR" => Ok(Gate::Nor),
            "XOR" => Ok(Gate::Xor),
            "XNOR" => Ok(Gate::Xnor),
            _ => Err(FHEError::UnknownGate(s.to_string())),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gate::And => "AND",
            Gate::Nand => "NAND",
            Gate::Or => "OR",
            Gate::Nor => "NOR",
            Gate::Xor => "XOR",
            Gate::Xnor => "XNOR",
        };
        f.write_str(name)
    }
}
