// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_aabb::Aabb;
use canopy_tree::{Tree, TreeBuilder};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

fn gen_grid_centers(side: usize, spacing: f64) -> Vec<[f64; 2]> {
    let mut out = Vec::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            out.push([x as f64 * spacing, y as f64 * spacing]);
        }
    }
    out
}

fn build_tree(centers: &[[f64; 2]], radius: f64) -> Tree {
    let mut tree: Tree = TreeBuilder::new(2)
        .skin_thickness(0.1)
        .initial_capacity(2 * centers.len())
        .build();
    for (i, center) in centers.iter().enumerate() {
        tree.insert(i as u32, center, radius).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for side in [16_usize, 32, 64] {
        let centers = gen_grid_centers(side, 2.0);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(side * side),
            &centers,
            |b, centers| {
                b.iter_batched(
                    || (),
                    |()| black_box(build_tree(centers, 0.9).height()),
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_aabb");
    for side in [16_usize, 32, 64] {
        let centers = gen_grid_centers(side, 2.0);
        let tree = build_tree(&centers, 0.9);
        let world = side as f64 * 2.0;
        let probes: Vec<Aabb> = (0..64)
            .map(|i| {
                let t = (i as f64 / 64.0) * (world - 8.0);
                Aabb::new(&[t, t], &[t + 8.0, t + 8.0]).unwrap()
            })
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(side * side),
            &(tree, probes),
            |b, (tree, probes)| {
                b.iter(|| {
                    let mut hits = 0_usize;
                    for probe in probes {
                        hits += tree.query_aabb(probe).unwrap().len();
                    }
                    black_box(hits)
                });
            },
        );
    }
    group.finish();
}

fn bench_update_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_churn");
    for side in [16_usize, 32] {
        let centers = gen_grid_centers(side, 2.0);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(side * side),
            &centers,
            |b, centers| {
                b.iter_batched(
                    || build_tree(centers, 0.9),
                    |mut tree| {
                        // Alternate sub-skin jitter (absorbed) with full-cell
                        // hops (reinserted).
                        for (i, center) in centers.iter().enumerate() {
                            let dx = if i % 2 == 0 { 0.05 } else { 2.0 };
                            let moved = [center[0] + dx, center[1]];
                            tree.update(i as u32, &moved, 0.9, false).unwrap();
                        }
                        black_box(tree.height())
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query, bench_update_churn);
criterion_main!(benches);
