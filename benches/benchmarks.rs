//! Performance benchmarks for canopy

use canopy::test_utils::TestTree;
use canopy::{Discard, TreeWalker, WalkConfig, format_size, tree::rollup_size};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_walk(c: &mut Criterion) {
    // 4 levels, 3 subdirectories and 10 files per directory: 120 dirs, 1210 files
    let tree = TestTree::generated(4, 3, 10, 256);

    let mut group = c.benchmark_group("walk");

    group.bench_function("counts_only", |b| {
        let walker = TreeWalker::new(WalkConfig {
            show_sizes: false,
            ..Default::default()
        });
        b.iter(|| walker.walk(black_box(tree.path()), &mut Discard).unwrap())
    });

    group.bench_function("with_rollups", |b| {
        let walker = TreeWalker::new(WalkConfig::default());
        b.iter(|| walker.walk(black_box(tree.path()), &mut Discard).unwrap())
    });

    group.bench_function("depth_limited", |b| {
        let walker = TreeWalker::new(WalkConfig {
            max_depth: Some(2),
            ..Default::default()
        });
        b.iter(|| walker.walk(black_box(tree.path()), &mut Discard).unwrap())
    });

    group.finish();
}

fn bench_rollup(c: &mut Criterion) {
    let tree = TestTree::generated(4, 3, 10, 256);

    c.bench_function("rollup_size", |b| {
        b.iter(|| rollup_size(black_box(tree.path())).unwrap())
    });
}

fn bench_format_size(c: &mut Criterion) {
    let sizes = [0u64, 1023, 1536, 5 * 1024 * 1024, 3 * 1024u64.pow(4)];

    c.bench_function("format_size", |b| {
        b.iter(|| {
            for size in sizes {
                black_box(format_size(black_box(size)));
            }
        })
    });
}

criterion_group!(benches, bench_walk, bench_rollup, bench_format_size);
criterion_main!(benches);
