//! Benchmark for Optional and Union combinator chains.
//!
//! Measures a short validation pipeline built from `flat_map`/`map` against
//! the equivalent hand-written `Option`/`Result` code.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use optunion::control::{Optional, Union};
use std::hint::black_box;

fn halve(n: u64) -> Optional<u64> {
    if n % 2 == 0 {
        Optional::present(n / 2)
    } else {
        Optional::empty()
    }
}

fn checked_divide(n: u64) -> Union<&'static str, u64> {
    if n == 0 {
        Union::left("div by zero")
    } else {
        Union::right(1_000_000 / n)
    }
}

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    for size in [100_u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("optional", size), &size, |bencher, &size| {
            bencher.iter(|| {
                (0..size)
                    .map(|n| {
                        Optional::present(black_box(n))
                            .flat_map(halve)
                            .flat_map(halve)
                            .map(|n| n + 1)
                            .get_or_else(|| 0)
                    })
                    .sum::<u64>()
            });
        });

        group.bench_with_input(BenchmarkId::new("std_option", size), &size, |bencher, &size| {
            bencher.iter(|| {
                (0..size)
                    .map(|n| {
                        Some(black_box(n))
                            .and_then(|n| (n % 2 == 0).then_some(n / 2))
                            .and_then(|n| (n % 2 == 0).then_some(n / 2))
                            .map_or(0, |n| n + 1)
                    })
                    .sum::<u64>()
            });
        });
    }

    group.finish();
}

fn benchmark_union_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("union_chain");

    for size in [100_u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, &size| {
            bencher.iter(|| {
                (0..size)
                    .map(|n| {
                        Union::<&str, u64>::right(black_box(n))
                            .flat_map(checked_divide)
                            .map(|n| n * 3)
                            .get_right_or(|| 0)
                    })
                    .sum::<u64>()
            });
        });

        group.bench_with_input(BenchmarkId::new("std_result", size), &size, |bencher, &size| {
            bencher.iter(|| {
                (0..size)
                    .map(|n| {
                        Ok::<u64, &str>(black_box(n))
                            .and_then(|n| {
                                if n == 0 {
                                    Err("div by zero")
                                } else {
                                    Ok(1_000_000 / n)
                                }
                            })
                            .map(|n| n * 3)
                            .unwrap_or(0)
                    })
                    .sum::<u64>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_optional_chain, benchmark_union_chain);
criterion_main!(benches);
