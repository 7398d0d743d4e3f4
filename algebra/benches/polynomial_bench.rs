use algebra::{Basis, Modulus, Polynomial};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const N: usize = 512;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let modulus = Modulus::new(132120577).unwrap();
    let basis = Basis::new(32, modulus).unwrap();

    let a = Polynomial::random(N, modulus, &mut rng);
    let b = Polynomial::random(N, modulus, &mut rng);

    c.bench_function("polynomial add", |bench| {
        bench.iter(|| black_box(&a) + black_box(&b))
    });

    c.bench_function("polynomial negacyclic mul", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });

    c.bench_function("polynomial decompose", |bench| {
        bench.iter(|| black_box(&a).decompose(basis))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
