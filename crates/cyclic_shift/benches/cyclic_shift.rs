use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use bench::descending;
use bench::random_permutation;
use bench::random_values;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use cyclic_shift::ALL_COUNTERS;
use cyclic_shift::InversionCounter;
use cyclic_shift::find_optimal_shift_with;
use std::hint::black_box;

const COUNT_SIZES: [usize; 4] = [256, 1_024, 4_096, 16_384];
const SEARCH_SIZES: [usize; 3] = [16, 32, 64];

#[derive(Clone, Copy, Debug)]
enum Shape {
    Permutation,
    FewDistinct,
    Descending,
}

impl Shape {
    fn label(self) -> &'static str {
        match self {
            Self::Permutation => "permutation",
            Self::FewDistinct => "few_distinct",
            Self::Descending => "descending",
        }
    }

    fn generate(self, n: usize) -> Vec<i64> {
        let mut rng = default_rng();
        match self {
            Self::Permutation => random_permutation(&mut rng, n),
            Self::FewDistinct => random_values(&mut rng, n, 0..=7),
            Self::Descending => descending(n),
        }
    }
}

const SHAPES: [Shape; 3] = [Shape::Permutation, Shape::FewDistinct, Shape::Descending];

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 1_024 {
        apply_small_runtime_config(group);
    } else if size <= 4_096 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn bench_count(c: &mut Criterion) {
    for shape in SHAPES {
        let mut group = c.benchmark_group(format!("count_inversions/{}", shape.label()));
        for &n in &COUNT_SIZES {
            apply_runtime_config_for_size(&mut group, n);
            let values = shape.generate(n);
            for counter in ALL_COUNTERS {
                // Quadratic counter is only measured on the small end.
                if counter == InversionCounter::Naive && n > 4_096 {
                    continue;
                }
                group.bench_function(BenchmarkId::new(counter.label(), n), |bencher| {
                    bencher.iter(|| black_box(counter.count(black_box(&values))))
                });
            }
        }
        group.finish();
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_optimal_shift");
    apply_small_runtime_config(&mut group);
    for &n in &SEARCH_SIZES {
        let values = Shape::Permutation.generate(n);
        for counter in ALL_COUNTERS {
            group.bench_function(BenchmarkId::new(counter.label(), n), |bencher| {
                bencher.iter(|| black_box(find_optimal_shift_with(black_box(&values), counter)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_count, bench_search);
criterion_main!(benches);
