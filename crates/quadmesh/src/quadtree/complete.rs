//! Region completion: tile the Z-order interval between two quadrants
//! with the fewest, largest possible quadrants.
//!
//! # Algorithm
//!
//! An implicit depth-first traversal of the refinement tree rooted at
//! the nearest common ancestor of the two anchors:
//!
//! 1. Seed a work list with the ancestor's four children, left to right.
//! 2. Pop the front quadrant `w`:
//!    - strictly between the anchors and clear of the upper anchor's
//!      ancestor chain → emit it,
//!    - ancestor of either anchor → refine: prepend its four children in
//!      reverse, so they are visited in ascending child id,
//!    - otherwise → drop it.
//! 3. When the list drains, optionally append the upper anchor.
//!
//! Prepending children keeps the traversal in Z-order, so the result
//! sequence is born sorted; no post-sort happens. Every link taken from
//! the shared pool is returned on every branch, which the exit
//! assertions verify.

use std::cmp::Ordering;

use tracing::debug;

use super::quadrant::Quadrant;
use crate::forest::{alloc_data, Forest, InitFn, TreeId};
use crate::storage::List;

/// Fill `which_tree` of `forest` with the sorted, complete sequence of
/// largest quadrants tiling the open Z-order interval `(q1, q2)`,
/// prepending `q1` if `include_q1` and appending `q2` if `include_q2`.
///
/// Requirements: `q1` and `q2` valid, `q1 < q2` in Z-order, and the
/// target tree empty. Each emitted quadrant (excluding the copied
/// anchors) has its payload allocated and initialized via `init`.
pub fn complete_region<P: Default>(
  forest: &mut Forest<P>,
  q1: &Quadrant,
  include_q1: bool,
  q2: &Quadrant,
  include_q2: bool,
  which_tree: TreeId,
  mut init: Option<&mut InitFn<'_, P>>,
) {
  let a = *q1;
  let b = *q2;
  assert!(
    a.is_valid() && b.is_valid(),
    "complete_region requires valid quadrants"
  );
  assert_eq!(
    a.compare(&b),
    Ordering::Less,
    "complete_region requires q1 < q2"
  );

  // Snapshots for the exit accounting.
  let quadrant_pool_size = forest.quadrant_pool.len();
  let data_pool_size = forest.data_pool.as_ref().map(|p| p.len());

  let Forest {
    trees,
    quadrant_pool,
    data_pool,
  } = forest;
  let tree = &mut trees[which_tree];
  assert!(tree.is_empty(), "complete_region requires an empty tree");

  if include_q1 {
    tree.push(a);
  }

  // Seed with the children of the nearest common ancestor, left to
  // right. Two distinct quadrants always leave their common ancestor
  // refinable.
  let ancestor = a.nearest_common_ancestor(&b);
  let mut work = List::with_pool(&mut *quadrant_pool);
  for child in ancestor
    .children()
    .expect("common ancestor of distinct quadrants is refinable")
  {
    work.push_back(child);
  }

  while let Some(w) = work.pop_front() {
    if a.compare(&w) == Ordering::Less
      && w.compare(&b) == Ordering::Less
      && !w.is_ancestor_of(&b)
    {
      // Strictly inside the interval and disjoint from b's chain.
      let mut r = w;
      r.data = alloc_data(data_pool, which_tree, &r, &mut init);
      tree.push(r);
    } else if w.is_ancestor_of(&a) || w.is_ancestor_of(&b) {
      // Straddles an anchor: refine. Reversed prepend visits the
      // children in ascending child id.
      let children = w
        .children()
        .expect("a proper ancestor is above the deepest level");
      for child in children.into_iter().rev() {
        work.push_front(child);
      }
    }
    // Anything else lies entirely outside (a, b).
  }

  debug_assert!(work.is_empty());
  drop(work);

  if include_q2 {
    tree.push(b);
  }

  debug_assert!(tree.is_complete());
  assert_eq!(
    quadrant_pool.len(),
    quadrant_pool_size,
    "every work-list link must return to the pool"
  );
  if let (Some(pool), Some(before)) = (data_pool.as_ref(), data_pool_size) {
    let created = tree.len() - include_q1 as usize - include_q2 as usize;
    assert_eq!(
      pool.len(),
      before + created,
      "data pool must grow by exactly the initialized quadrants"
    );
  }

  debug!(
    tree = which_tree,
    quadrants = tree.len(),
    maxlevel = tree.maxlevel(),
    "completed region"
  );
}

#[cfg(test)]
#[path = "complete_test.rs"]
mod complete_test;
