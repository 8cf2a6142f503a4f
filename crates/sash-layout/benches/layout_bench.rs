//! Benchmarks for the split-tree engine.
//!
//! Run with: cargo bench -p sash-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sash_layout::{LayoutTree, NodeConfig, NodeId, Point, Position, Rect, classify};
use std::hint::black_box;

/// Build an alternating split spine of the given depth.
fn make_tree(depth: usize) -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new(NodeConfig::root(1920.0, 1080.0)).expect("valid root config");
    let root_id = tree.root_id().clone();
    let mut target = root_id.clone();
    for level in 0..depth {
        let position = if level % 2 == 0 {
            Position::Right
        } else {
            Position::Bottom
        };
        let (_, second) = tree.split(&target, position, 0.5).expect("leaf splits");
        target = second;
    }
    (tree, root_id)
}

fn bench_resize_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/resize_cascade");

    for depth in [4, 8, 16, 32] {
        let (tree, root_id) = make_tree(depth);
        group.bench_with_input(
            BenchmarkId::new("set_width", depth),
            &(tree, root_id),
            |b, (tree, root_id)| {
                let mut tree = tree.clone();
                let mut grow = false;
                b.iter(|| {
                    grow = !grow;
                    let width = if grow { 2400.0 } else { 1920.0 };
                    tree.set_width(black_box(root_id), black_box(width))
                        .expect("root resize succeeds");
                });
            },
        );
    }

    group.finish();
}

fn bench_min_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/min_solver");

    for depth in [4, 8, 16, 32] {
        let (mut tree, root_id) = make_tree(depth);
        let leaves = tree.leaf_ids(&root_id).expect("root exists");
        for (index, leaf) in leaves.iter().enumerate() {
            if let Some(node) = tree.node_mut(leaf) {
                node.set_min_width(40.0 + index as f64);
                node.set_min_height(20.0 + index as f64);
            }
        }
        group.bench_with_input(
            BenchmarkId::new("subtree_min_width", depth),
            &(tree, root_id),
            |b, (tree, root_id)| {
                b.iter(|| {
                    black_box(tree.subtree_min_width(black_box(root_id)).expect("root exists"))
                });
            },
        );
    }

    group.finish();
}

fn bench_classify_grid(c: &mut Criterion) {
    let rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    c.bench_function("layout/classify_33x33_grid", |b| {
        b.iter(|| {
            for ix in 0..33 {
                for iy in 0..33 {
                    let point = Point::new(f64::from(ix) * 60.0, f64::from(iy) * 33.75);
                    let _ = black_box(classify(black_box(rect), point));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resize_cascade,
    bench_min_solver,
    bench_classify_grid
);
criterion_main!(benches);
