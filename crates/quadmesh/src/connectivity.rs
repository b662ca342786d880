//! Connectivity - how the coarse trees of a forest glue together.
//!
//! Each tree has four vertices, four neighbor trees and four faces. The
//! tables are flat, four entries per tree, indexed `tree * 4 + corner`
//! (or face). All stored indices are 0-based; the mesh file format they
//! are read from is 1-based (see [`crate::file`]).

/// Coarse-tree connectivity tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connectivity {
  /// Number of trees.
  pub num_trees: i32,
  /// Number of mesh vertices.
  pub num_vertices: i32,
  /// Vertex index per tree corner; `num_trees * 4` entries.
  pub tree_to_vertex: Vec<i32>,
  /// Neighbor tree per tree face; `num_trees * 4` entries.
  pub tree_to_tree: Vec<i32>,
  /// Neighbor's face number per tree face; `num_trees * 4` entries.
  pub tree_to_face: Vec<i8>,
}

impl Connectivity {
  /// Allocate zero-filled tables for `num_trees` trees and
  /// `num_vertices` vertices.
  pub fn new(num_trees: i32, num_vertices: i32) -> Self {
    assert!(num_trees >= 0 && num_vertices >= 0);
    let entries = num_trees as usize * 4;
    Self {
      num_trees,
      num_vertices,
      tree_to_vertex: vec![0; entries],
      tree_to_tree: vec![0; entries],
      tree_to_face: vec![0; entries],
    }
  }

  /// Heap bytes held by the tables.
  pub fn bytes_total(&self) -> usize {
    self.tree_to_vertex.capacity() * std::mem::size_of::<i32>()
      + self.tree_to_tree.capacity() * std::mem::size_of::<i32>()
      + self.tree_to_face.capacity() * std::mem::size_of::<i8>()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_allocates_four_entries_per_tree() {
    let conn = Connectivity::new(3, 8);
    assert_eq!(conn.tree_to_vertex.len(), 12);
    assert_eq!(conn.tree_to_tree.len(), 12);
    assert_eq!(conn.tree_to_face.len(), 12);
  }

  #[test]
  fn test_new_empty() {
    let conn = Connectivity::new(0, 0);
    assert!(conn.tree_to_vertex.is_empty());
  }
}
