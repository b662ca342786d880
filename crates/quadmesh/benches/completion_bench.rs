//! Benchmark for region completion between distant corner quadrants.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadmesh::constants::cell_len;
use quadmesh::{complete_region, Forest, Quadrant, MAX_LEVEL};

/// First and last cell of the domain at `depth`.
fn corner_anchors(depth: i32) -> (Quadrant, Quadrant) {
  let offset = quadmesh::ROOT_LEN - cell_len(depth);
  (
    Quadrant::new(0, 0, depth),
    Quadrant::new(offset, offset, depth),
  )
}

/// Benchmark corner-to-corner completion at several depths.
///
/// The result size grows linearly with depth (three siblings per level
/// climbing out of each corner), so this measures the per-quadrant cost
/// of the work-list traversal.
fn bench_complete_region(c: &mut Criterion) {
  let mut group = c.benchmark_group("complete_region");
  for depth in [4, 12, 20, MAX_LEVEL] {
    let (q1, q2) = corner_anchors(depth);
    group.bench_with_input(
      BenchmarkId::new("corner_to_corner", depth),
      &depth,
      |b, _| {
        b.iter(|| {
          let mut forest: Forest = Forest::new(1);
          complete_region(
            &mut forest,
            black_box(&q1),
            true,
            black_box(&q2),
            true,
            0,
            None,
          );
          black_box(forest.tree(0).len())
        });
      },
    );
  }
  group.finish();
}

/// Benchmark completion together with payload allocation.
fn bench_completion_with_payload(c: &mut Criterion) {
  let (q1, q2) = corner_anchors(16);
  c.bench_function("complete_region (u64 payload, depth 16)", |b| {
    b.iter(|| {
      let mut forest: Forest<u64> = Forest::new(1);
      let mut init = |_tree: quadmesh::TreeId, q: &Quadrant| q.linear_id(q.level);
      complete_region(&mut forest, &q1, true, &q2, true, 0, Some(&mut init));
      black_box(forest.data_pool_len())
    });
  });
}

criterion_group!(benches, bench_complete_region, bench_completion_with_payload);
criterion_main!(benches);
