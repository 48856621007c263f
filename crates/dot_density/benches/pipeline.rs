mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dot_density::prelude::*;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A `side` x `side` grid of star-shaped regions, each with the same population.
fn grid_features(side: usize, population: u64) -> (Vec<Feature>, PopulationTable) {
    let mut features = Vec::with_capacity(side * side);
    let mut table = PopulationTable::new();
    for iy in 0..side {
        for ix in 0..side {
            let name = format!("r{ix}_{iy}");
            let center = DVec2::new(ix as f64 * 20.0 + 10.0, iy as f64 * 20.0 + 10.0);
            let ring = common::star(center, 10.0, 4.0, 7);
            features.push(Feature::new(name.clone(), Geometry::Polygon(Polygon::new(ring))));
            table.insert(name, population);
        }
    }
    (features, table)
}

fn pipeline_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/grid");

    for &side in &[4usize, 16, 32] {
        let (features, table) = grid_features(side, 250_000);
        let config = DensityConfig::new(1000.0);
        let runner = DotDensityRunner::try_new(config, &table, &IdentityProjection)
            .expect("valid config");
        group.throughput(common::elements_throughput(side * side * 250));
        let mut rng = StdRng::seed_from_u64(0x9A7 ^ side as u64);

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let result = runner.run(&features, &mut rng);
                black_box(result.dots.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = pipeline_benches
}
criterion_main!(benches);
