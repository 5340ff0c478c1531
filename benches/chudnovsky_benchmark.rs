// ============================================================================
// Chudnovsky Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Term Generation - Direct (from-scratch) vs incremental (multiplier)
// 2. Full Runs - End-to-end fixed-term-count runs including rendering
//
// The direct strategy recomputes (6k)!, (3k)!, k! and 640320^(3k) on every
// iteration, so its per-term cost grows with k; the incremental strategy's
// per-term cost is dominated by one big division at the working precision.
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pifind::prelude::*;
use std::sync::Arc;

fn benchmark_term_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("term_generation");

    for terms in [10u64, 30, 60].iter() {
        group.bench_with_input(BenchmarkId::new("direct", terms), terms, |b, &terms| {
            b.iter(|| {
                let engine = ChudnovskyEngineBuilder::new()
                    .digits(1000)
                    .direct_terms()
                    .build(Arc::new(NoOpObserver))
                    .unwrap();
                black_box(engine.run(&IterationBudget::new(terms)).unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("incremental", terms), terms, |b, &terms| {
            b.iter(|| {
                let engine = ChudnovskyEngineBuilder::new()
                    .digits(1000)
                    .incremental_terms()
                    .build(Arc::new(NoOpObserver))
                    .unwrap();
                black_box(engine.run(&IterationBudget::new(terms)).unwrap())
            });
        });
    }

    group.finish();
}

fn benchmark_render_and_search(c: &mut Criterion) {
    let config = ComputeConfig::for_digits(1000)
        .with_term_generation(TermGenerationKind::Incremental);
    let result = create_from_config(&config, Arc::new(NoOpObserver))
        .unwrap()
        .run(&IterationBudget::new(72))
        .unwrap();

    c.bench_function("render_1000_digits", |b| {
        b.iter(|| black_box(result.digits(1000)));
    });

    let digits = result.digits(1000);
    c.bench_function("search_feynman_point", |b| {
        b.iter(|| black_box(find_sequence(&digits, "999999", SearchScope::Full).unwrap()));
    });
}

criterion_group!(benches, benchmark_term_generation, benchmark_render_and_search);
criterion_main!(benches);
