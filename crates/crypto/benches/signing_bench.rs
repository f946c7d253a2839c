//! Signing Performance Benchmarks
//!
//! Measures per-algorithm cost of:
//! - Key pair generation and PEM encoding
//! - Signing a chained transaction payload (includes key decoding)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sigchain_crypto::{Algorithm, AlgorithmRegistry};

fn bench_generate(c: &mut Criterion) {
    let registry = AlgorithmRegistry::default();
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    for algorithm in Algorithm::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| registry.generate(black_box(algorithm)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let registry = AlgorithmRegistry::default();
    let payload = b"42.transaction-data.MTIzZTQ1NjctZTg5Yi0xMmQzLWE0NTYtNDI2NjE0MTc0MDAw";
    let mut group = c.benchmark_group("sign");

    for algorithm in Algorithm::ALL {
        let encoded = registry.generate(algorithm).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| {
                    registry
                        .sign(algorithm, black_box(&encoded.private_pem), black_box(payload))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_sign);
criterion_main!(benches);
