//! Pair-detector benchmarks: hash-backed detectors against the quadratic
//! reference, plus the C ABI entry points.

use aquant_bench::{pseudo_random_i32, worst_case_sum_input};
use aquant_core::{PairRelation, has_pair, has_pair_naive};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_detectors_no_hit(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 4096, 65536];
    let mut group = c.benchmark_group("pair_no_hit");

    for &size in sizes {
        let arr = worst_case_sum_input(size);
        group.throughput(Throughput::Elements(size as u64));
        for relation in PairRelation::ALL {
            group.bench_with_input(
                BenchmarkId::new(relation.name(), size),
                &arr,
                |b, arr| b.iter(|| black_box(has_pair(relation, Some(arr), black_box(1)))),
            );
        }
    }
    group.finish();
}

fn bench_naive_reference(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 1024];
    let mut group = c.benchmark_group("pair_sum_vs_naive");

    for &size in sizes {
        let arr = worst_case_sum_input(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("multiset", size), &arr, |b, arr| {
            b.iter(|| black_box(has_pair(PairRelation::Sum, Some(arr), 1)));
        });
        group.bench_with_input(BenchmarkId::new("naive", size), &arr, |b, arr| {
            b.iter(|| black_box(has_pair_naive(PairRelation::Sum, Some(arr), 1)));
        });
    }
    group.finish();
}

fn bench_random_inputs(c: &mut Criterion) {
    let arr = pseudo_random_i32(4096, 0x5EED, 1_000_000);
    let mut group = c.benchmark_group("pair_random_4096");
    for relation in PairRelation::ALL {
        group.bench_function(relation.name(), |b| {
            b.iter(|| black_box(has_pair(relation, Some(&arr), black_box(777))));
        });
    }
    group.finish();
}

fn bench_abi_entry(c: &mut Criterion) {
    let arr = worst_case_sum_input(4096);
    c.bench_function("abi_array_has_pair_sum_4096", |b| {
        b.iter(|| {
            // SAFETY: `arr` is a live Vec of exactly `arr.len()` elements.
            black_box(unsafe {
                aquant_abi::pair_abi::array_has_pair_sum(arr.as_ptr(), arr.len(), 1)
            })
        });
    });
}

criterion_group!(
    benches,
    bench_detectors_no_hit,
    bench_naive_reference,
    bench_random_inputs,
    bench_abi_entry
);
criterion_main!(benches);
