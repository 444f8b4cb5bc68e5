//! Criterion micro-benchmarks for the safe concatenation API.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hulk_runtime_bench::{chained_concat, operand_pair, SIZES};
use hulk_runtime_core::Concatenator;

fn bench_concat_sizes(c: &mut Criterion) {
    let concatenator = Concatenator::default();
    let mut group = c.benchmark_group("concat");
    for &total in SIZES {
        let (a, b) = operand_pair(total);
        group.throughput(Throughput::Bytes(total as u64));
        group.bench_with_input(BenchmarkId::from_parameter(total), &(a, b), |bench, (a, b)| {
            bench.iter(|| concatenator.concat(black_box(a), black_box(b)).unwrap());
        });
    }
    group.finish();
}

fn bench_concat_bytes(c: &mut Criterion) {
    let concatenator = Concatenator::default();
    let (a, b) = operand_pair(256);
    let (a, b) = (a.as_bytes_with_nul().to_vec(), b.as_bytes_with_nul().to_vec());
    c.bench_function("concat_bytes_256", |bench| {
        bench.iter(|| concatenator.concat_bytes(black_box(&a), black_box(&b)).unwrap());
    });
}

fn bench_chained_concat(c: &mut Criterion) {
    let concatenator = Concatenator::default();
    c.bench_function("chained_concat_100x16", |bench| {
        bench.iter(|| chained_concat(&concatenator, black_box(c"0123456789abcdef"), 100).unwrap());
    });
}

criterion_group!(
    benches,
    bench_concat_sizes,
    bench_concat_bytes,
    bench_chained_concat
);
criterion_main!(benches);
