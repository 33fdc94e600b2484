//! Criterion view of the pow benchmark.
//!
//! `pow_literal` mirrors the classic `DoNotOptimize(y = pow(1.2, 1.2))`
//! loop; the group below runs every registered kernel over random operand
//! tables of increasing size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pow_microbench::math::pow::{available_variants, PowInputs, LITERAL_BASE, LITERAL_EXPONENT};
use std::hint::black_box;

const SEED: u64 = 0x12345678;
const SIZES: [usize; 4] = [1, 64, 1024, 16384];

fn bench_pow_single(c: &mut Criterion) {
    let mut y = 0.0f64;
    c.bench_function("pow_literal", |b| {
        b.iter(|| {
            y = black_box(1.2f64.powf(1.2));
        })
    });
    println!("pow(1.2, 1.2) = {}", y);

    c.bench_function("pow_black_box", |b| {
        b.iter(|| black_box(black_box(LITERAL_BASE).powf(black_box(LITERAL_EXPONENT))))
    });

    let inputs = PowInputs::random(1024, SEED);
    let (bases, exponents) = (inputs.bases(), inputs.exponents());
    let mut i = 0usize;
    let mut last = 0.0f64;
    c.bench_function("pow_random", |b| {
        b.iter(|| {
            i = (i + 1) % bases.len();
            last = black_box(bases[i].powf(exponents[i]));
        })
    });
    println!("last random pow = {}", last);
}

fn bench_pow_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow_variants");

    for &size in &SIZES {
        let inputs = PowInputs::random(size, SEED.wrapping_add(size as u64));
        group.throughput(Throughput::Elements(size as u64));

        for variant in available_variants() {
            let kernel = variant.function;
            group.bench_with_input(BenchmarkId::new(variant.name, size), &inputs, |b, inputs| {
                b.iter(|| kernel.run(black_box(inputs)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_pow_single, bench_pow_variants);
criterion_main!(benches);
