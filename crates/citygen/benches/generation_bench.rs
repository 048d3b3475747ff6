//! Criterion benchmarks for city generation.
//!
//! Run with: cargo bench -p citygen --bench generation_bench --features bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use citygen::buildings::spawn_buildings;
use citygen::context::GenContext;
use citygen::test_harness::TestGen;
use citygen::zones::generate_zones;
use citygen::{generate_city, CityTemplates, GenerationParams};

fn bench_full_generation(c: &mut Criterion) {
    let templates = CityTemplates::default();
    let params = GenerationParams::default();
    c.bench_function("generate_city_standard", |b| {
        b.iter(|| generate_city(black_box(42), &templates, &params))
    });
}

fn bench_zoning(c: &mut Criterion) {
    let templates = CityTemplates::default();
    let params = GenerationParams::default();
    c.bench_function("generate_zones_32x32", |b| {
        b.iter(|| {
            let mut ctx = GenContext::new(black_box(7), &params);
            generate_zones(&mut ctx, &templates)
        })
    });
}

fn bench_buildings(c: &mut Criterion) {
    let templates = CityTemplates::default();
    let params = GenerationParams::default();
    let mut ctx = GenContext::new(7, &params);
    let (grid, _) = generate_zones(&mut ctx, &templates);
    c.bench_function("spawn_buildings_32x32", |b| {
        b.iter(|| {
            let mut ctx = GenContext::new(black_box(7), &params);
            spawn_buildings(&mut ctx, &grid, &templates)
        })
    });
}

fn bench_population_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_city_agents");
    for agents in [50u32, 200, 800] {
        let harness = TestGen::new().with_agents(agents);
        group.bench_with_input(BenchmarkId::from_parameter(agents), &harness, |b, harness| {
            b.iter(|| harness.generate())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_full_generation,
    bench_zoning,
    bench_buildings,
    bench_population_scaling
);
criterion_main!(benches);
