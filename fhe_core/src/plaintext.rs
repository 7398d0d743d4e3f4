use algebra::Modulus;

/// Encodes a bit as `bit * m/4`.
#[inline]
pub fn encode(bit: bool, modulus: Modulus) -> u64 {
    if bit {
        modulus.fraction(1, 4)
    } else {
        0
    }
}

/// Decodes a phase: `1` iff `m/8 < phase <= 5m/8`.
///
/// The two bands are centered on `m/4` and `0` with a guard of `m/8` on each side
/// of the `m/4` encoding, so the rule is the same for every modulus a ciphertext may live in.
#[inline]
pub fn decode(phase: u64, modulus: Modulus) -> bool {
    let m = modulus.value() as u128;
    let p = 8 * phase as u128;
    p > m && p <= 5 * m
}

/// Returns the signed distance between `phase` and the encoding of `bit`.
#[inline]
pub fn noise(phase: u64, bit: bool, modulus: Modulus) -> i64 {
    let diff = phase as i128 - encode(bit, modulus) as i128;
    modulus.centered(diff.rem_euclid(modulus.value() as i128) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bands() {
        let q = Modulus::new(1024).unwrap();
        assert!(!decode(0, q));
        assert!(!decode(128, q));
        assert!(decode(129, q));
        assert!(decode(256, q));
        assert!(decode(640, q));
        assert!(!decode(641, q));
        assert!(!decode(1023, q));

        let big = Modulus::new(132120577).unwrap();
        assert!(decode(encode(true, big), big));
        assert!(!decode(encode(false, big), big));
        assert!(decode(encode(true, big) + 16_000_000, big));
        assert!(!decode(big.value() - 16_000_000, big));
    }

    #[test]
    fn test_noise() {
        let q = Modulus::new(1024).unwrap();
        assert_eq!(noise(250, true, q), -6);
        assert_eq!(noise(3, false, q), 3);
        assert_eq!(noise(1020, false, q), -4);
    }
}
