//! Forest - the mesh handle owning trees and pools.
//!
//! A forest holds one [`Tree`] per connectivity tree, a shared pool the
//! completion work lists draw their links from, and an optional payload
//! pool for per-quadrant user data.
//!
//! # Payload model
//!
//! The payload type is the `P` parameter. When `P` is zero-sized (the
//! default `()`), no data pool exists and every quadrant's `data` handle
//! stays `None`. Otherwise each newly created quadrant gets one cell in
//! the data pool, filled by the caller's initializer (or `P::default()`
//! when none is given). [`Forest::init_data`] and [`Forest::free_data`]
//! are the only operations that touch the handle.

use std::mem;

use crate::connectivity::Connectivity;
use crate::quadtree::{DataRef, Quadrant, Tree};
use crate::storage::{LinkPool, MemPool};

/// Index of a tree within its forest.
pub type TreeId = usize;

/// Per-quadrant payload initializer.
///
/// Invoked exactly once per newly created quadrant; receives the tree id
/// and the finished quadrant (coordinates and level are fixed by then)
/// and returns the payload to store.
pub type InitFn<'a, P> = dyn FnMut(TreeId, &Quadrant) -> P + 'a;

/// Collection of refinement trees sharing pooled storage.
pub struct Forest<P = ()> {
  pub(crate) trees: Vec<Tree>,
  pub(crate) quadrant_pool: LinkPool<Quadrant>,
  pub(crate) data_pool: Option<MemPool<P>>,
}

impl<P: Default> Forest<P> {
  /// Create a forest of `num_trees` empty trees.
  ///
  /// The data pool exists only for payload types with nonzero size.
  pub fn new(num_trees: usize) -> Self {
    Self {
      trees: (0..num_trees).map(|_| Tree::new()).collect(),
      quadrant_pool: LinkPool::new(),
      data_pool: (mem::size_of::<P>() > 0).then(MemPool::new),
    }
  }

  /// Create a forest with one tree per connectivity tree.
  pub fn from_connectivity(connectivity: &Connectivity) -> Self {
    Self::new(connectivity.num_trees as usize)
  }

  /// Number of trees.
  pub fn num_trees(&self) -> usize {
    self.trees.len()
  }

  /// Borrow a tree.
  pub fn tree(&self, id: TreeId) -> &Tree {
    &self.trees[id]
  }

  /// Borrow a tree mutably.
  pub fn tree_mut(&mut self, id: TreeId) -> &mut Tree {
    &mut self.trees[id]
  }

  /// True if quadrants of this forest carry payloads.
  pub fn has_data(&self) -> bool {
    self.data_pool.is_some()
  }

  /// Live cells in the payload pool (0 without one).
  pub fn data_pool_len(&self) -> usize {
    self.data_pool.as_ref().map_or(0, MemPool::len)
  }

  /// Live links in the shared work-list pool.
  pub fn quadrant_pool_len(&self) -> usize {
    self.quadrant_pool.len()
  }

  /// Allocate and initialize the payload of a freshly created quadrant.
  ///
  /// No-op for payload-free forests. The initializer must not be relied
  /// on to run in that case.
  pub fn init_data(
    &mut self,
    which_tree: TreeId,
    quad: &mut Quadrant,
    mut init: Option<&mut InitFn<'_, P>>,
  ) {
    debug_assert!(quad.is_valid());
    quad.data = alloc_data(&mut self.data_pool, which_tree, quad, &mut init);
  }

  /// Return a quadrant's payload cell to the pool and clear its handle.
  pub fn free_data(&mut self, quad: &mut Quadrant) {
    debug_assert!(quad.is_valid());
    if let (Some(pool), Some(slot)) = (self.data_pool.as_mut(), quad.data.take()) {
      pool.free(slot);
    }
  }

  /// Read a quadrant's payload.
  pub fn data(&self, quad: &Quadrant) -> Option<&P> {
    match (&self.data_pool, quad.data) {
      (Some(pool), Some(slot)) => Some(pool.get(slot)),
      _ => None,
    }
  }

  /// Mutate a quadrant's payload.
  pub fn data_mut(&mut self, quad: &Quadrant) -> Option<&mut P> {
    match (&mut self.data_pool, quad.data) {
      (Some(pool), Some(slot)) => Some(pool.get_mut(slot)),
      _ => None,
    }
  }

  /// Approximate heap bytes held by trees and pools.
  pub fn memory_used(&self) -> usize {
    self
      .trees
      .iter()
      .map(|t| t.quadrants.bytes_total())
      .sum::<usize>()
      + self.quadrant_pool.bytes_total()
      + self.data_pool.as_ref().map_or(0, MemPool::bytes_total)
  }
}

/// Shared payload-allocation path for [`Forest::init_data`] and the
/// completion algorithm (which holds the forest's fields split).
pub(crate) fn alloc_data<P: Default>(
  data_pool: &mut Option<MemPool<P>>,
  which_tree: TreeId,
  quad: &Quadrant,
  init: &mut Option<&mut InitFn<'_, P>>,
) -> Option<DataRef> {
  let pool = data_pool.as_mut()?;
  let payload = match init {
    Some(f) => f(which_tree, quad),
    None => P::default(),
  };
  Some(pool.alloc(payload))
}

#[cfg(test)]
#[path = "forest_test.rs"]
mod forest_test;
