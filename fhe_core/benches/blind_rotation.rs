use algebra::Polynomial;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fhe_core::{
    BlindRotation, BlindRotationType, CggiBlindRotationKey, ConstParameters, DmBlindRotationKey,
    KeySwitchingKey, LweCiphertext, Parameters, RlweCiphertext, SecretKeyPack, SecretKeyType,
};
use rand::Rng;

fn params(
    secret_key_type: SecretKeyType,
    blind_rotation_type: BlindRotationType,
) -> Parameters {
    Parameters::new(ConstParameters {
        lwe_dimension: 16,
        lwe_modulus: 1024,
        ring_dimension: 512,
        ring_modulus: 132120577,
        secret_key_type,
        secret_std_dev: 3.2,
        noise_std_dev: 3.2,
        blind_rotation_basis: 32,
        key_switching_basis: 32,
        blind_rotation_type,
        modulus_switch: false,
    })
    .unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let sk = SecretKeyPack::new(
        params(SecretKeyType::Binary, BlindRotationType::CGGI),
        &mut rng,
    );
    let n = sk.parameters().ring_dimension();
    let big_q = sk.parameters().ring_modulus();
    let mask: Vec<u64> = (0..16).map(|_| rng.gen_range(0..1024)).collect();
    let acc = RlweCiphertext::trivial(Polynomial::constant(big_q.fraction(1, 8), n, big_q));

    let dm = DmBlindRotationKey::generate(&sk, &mut rng).unwrap();
    let cggi = CggiBlindRotationKey::generate(&sk, &mut rng).unwrap();
    let ksk = KeySwitchingKey::generate(&sk, &mut rng).unwrap();
    let extracted = LweCiphertext::zero(n, big_q);

    c.bench_function("DM blind rotation", |b| {
        b.iter(|| dm.blind_rotate(black_box(acc.clone()), black_box(&mask)))
    });

    c.bench_function("CGGI blind rotation", |b| {
        b.iter(|| cggi.blind_rotate(black_box(acc.clone()), black_box(&mask)))
    });

    c.bench_function("key switch", |b| {
        b.iter(|| ksk.key_switch(black_box(&extracted)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
