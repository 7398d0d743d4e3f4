use algebra::{reduce::*, Basis, Modulus, Polynomial};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

const N: usize = 512;

fn naive_negacyclic(a: &[u64], b: &[u64], modulus: Modulus) -> Vec<u64> {
    let n = a.len();
    let mut res = vec![0u64; n];
    for i in 0..n {
        for j in 0..n {
            let p = modulus.reduce_mul(a[i], b[j]);
            if i + j < n {
                modulus.reduce_add_assign(&mut res[i + j], p);
            } else {
                modulus.reduce_sub_assign(&mut res[i + j - n], p);
            }
        }
    }
    res
}

#[test]
fn test_ring_laws_large() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let m = Modulus::new(132120577).unwrap();

    let a = Polynomial::random(N, m, &mut rng);
    let b = Polynomial::random(N, m, &mut rng);
    let c = Polynomial::random(N, m, &mut rng);

    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    assert_eq!(&a * &Polynomial::one(N, m), a);
}

#[test]
fn test_mul_matches_naive() {
    let mut rng = thread_rng();
    for m in [1024u64, 1032193, 1 << 32] {
        let m = Modulus::new(m).unwrap();
        let a = Polynomial::random(64, m, &mut rng);
        let b = Polynomial::random(64, m, &mut rng);
        assert_eq!((&a * &b).data(), naive_negacyclic(a.data(), b.data(), m));
    }
}

#[test]
fn test_monomial_rotation() {
    let mut rng = thread_rng();
    let m = Modulus::new(1032193).unwrap();
    let n = 16;
    let a = Polynomial::random(n, m, &mut rng);

    for e in 0..2 * n {
        let rotated = &a * &Polynomial::monomial(e, n, m);
        for k in 0..n {
            // coefficient k of x^e * a comes from a_{k - e} with one sign flip per wrap
            let src = (k + 2 * n - e) % (2 * n);
            let expect = if src < n {
                a[src]
            } else {
                m.reduce_neg(a[src - n])
            };
            assert_eq!(rotated[k], expect, "e = {e}, k = {k}");
        }
    }
}

#[test]
fn test_gadget_round_trip() {
    let mut rng = thread_rng();
    let m = Modulus::new(132120577).unwrap();
    let basis = Basis::new(32, m).unwrap();
    let a = Polynomial::random(N, m, &mut rng);
    assert_eq!(Polynomial::compose(&a.decompose(basis), basis).unwrap(), a);

    for _ in 0..1000 {
        let v = rng.gen_range(0..m.value());
        assert_eq!(basis.compose_value(&basis.decompose_value(v), m).unwrap(), v);
    }
}
