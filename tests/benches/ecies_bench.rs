//! ECIES throughput per curve

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eccrypt_algorithms::CurveId;
use eccrypt_pke::Configuration;
use eccrypt_tests::seeded_rng;

const MESSAGE_SIZES: [usize; 3] = [32, 1024, 16 * 1024];

fn bench_key_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECIES_KeyGen");
    for curve in CurveId::ALL {
        let config = Configuration::for_curve(curve);
        let mut rng = seeded_rng(1);
        group.bench_function(curve.name(), |b| {
            b.iter(|| black_box(config.key_pair_with_rng(&mut rng).unwrap()))
        });
    }
    group.finish();
}

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECIES_Encrypt");
    for curve in CurveId::ALL {
        let config = Configuration::for_curve(curve);
        let mut rng = seeded_rng(2);
        let pair = config.key_pair_with_rng(&mut rng).unwrap();
        for size in MESSAGE_SIZES {
            let message = vec![0x42u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(curve.name(), size), &message, |b, m| {
                b.iter(|| {
                    config
                        .encrypt_with_rng(black_box(m), pair.public_key.as_bytes(), &mut rng)
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECIES_Decrypt");
    for curve in CurveId::ALL {
        let config = Configuration::for_curve(curve);
        let mut rng = seeded_rng(3);
        let pair = config.key_pair_with_rng(&mut rng).unwrap();
        for size in MESSAGE_SIZES {
            let wire = config
                .encrypt_with_rng(&vec![0x42u8; size], pair.public_key.as_bytes(), &mut rng)
                .unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(curve.name(), size), &wire, |b, w| {
                b.iter(|| config.decrypt(black_box(w), pair.private_key.as_bytes()).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_key_generation, bench_encrypt, bench_decrypt);
criterion_main!(benches);
