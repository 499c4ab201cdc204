//! Sorting network benchmarks: SIMD kernels against scalar sorts.
//!
//! # Benchmark Categories
//!
//! ## 1. **Single Array**
//! - `slice::sort_unstable` on one short array (baseline)
//! - The scalar compare-swap network (same comparators, no SIMD)
//! - The SIMD kernel with exact and whole-register access
//!
//! ## 2. **Batches**
//! - Many independent arrays sorted one after another and with `rayon`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdnet::network::{
    Batcher16, Bitonic32, Bitonic8, Bosenelson31, Descriptor, Minimum16, Network,
};
use simdnet::simd::Extent;
use simdnet::sort::register_lanes;
use simdnet::{par_sort_chunks, sort, sort_padded, SortElement};

/// Arrays per batch benchmark.
const BATCH: usize = 16_384;

/// Reproducible random values; the seed is fixed so runs compare.
fn generate_test_data<T>(len: usize) -> Vec<T>
where
    StandardUniform: Distribution<T>,
{
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random()).collect()
}

fn bench_kernel<K: Network, T: SortElement>(c: &mut Criterion)
where
    StandardUniform: Distribution<T>,
{
    let mut group = c.benchmark_group(format!("{}_{}", K::NAME, T::TYPE_NAME));
    group.throughput(Throughput::Elements(K::N as u64));

    let input: Vec<T> = generate_test_data(register_lanes::<K, T>());
    let descriptor = Descriptor::of::<K>();

    group.bench_function("std_sort_unstable", |b| {
        b.iter_batched_ref(
            || input[..K::N].to_vec(),
            |data| data.sort_unstable(),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("scalar_network", |b| {
        b.iter_batched_ref(
            || input[..K::N].to_vec(),
            |data| descriptor.apply_scalar(black_box(data)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("simd_exact", |b| {
        b.iter_batched_ref(
            || input[..K::N].to_vec(),
            |data| sort::<K, T>(black_box(data)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("simd_register_padded", |b| {
        b.iter_batched_ref(
            || input.clone(),
            |data| sort_padded::<K, T>(black_box(data)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch_minimum_16_u32");
    let input: Vec<u32> = generate_test_data(BATCH * Minimum16::N);
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_with_input(BenchmarkId::new("std_sort_unstable", BATCH), &input, |b, input| {
        b.iter_batched_ref(
            || input.clone(),
            |data| {
                for chunk in data.chunks_exact_mut(Minimum16::N) {
                    chunk.sort_unstable();
                }
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_with_input(BenchmarkId::new("simd", BATCH), &input, |b, input| {
        b.iter_batched_ref(
            || input.clone(),
            |data| {
                for chunk in data.chunks_exact_mut(Minimum16::N) {
                    sort::<Minimum16, u32>(chunk).unwrap();
                }
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_with_input(BenchmarkId::new("parallel_simd", BATCH), &input, |b, input| {
        b.iter_batched_ref(
            || input.clone(),
            |data| par_sort_chunks::<Minimum16, u32>(data),
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn all_benchmarks(c: &mut Criterion) {
    let unused = simdnet::simd::caps::report();
    if !unused.is_empty() {
        println!("host extensions not used by this build: {}", unused.join(", "));
    }

    bench_kernel::<Batcher16, u32>(c);
    bench_kernel::<Minimum16, u8>(c);
    bench_kernel::<Bitonic8, i64>(c);
    bench_kernel::<Bosenelson31, i8>(c);
    bench_kernel::<Bitonic32, u16>(c);
    bench_batches(c);
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
