//! quadmesh - engine-independent quadtree adaptive mesh representation
//!
//! This crate provides the core of a 2-D adaptive mesh: quadrants encoded on
//! a fixed integer lattice with a Morton (Z-order) total order, linear
//! quadrant sequences with sortedness/completeness invariants, and the
//! region-completion algorithm that tiles the interval between two quadrants
//! with the largest possible cells.
//!
//! # Features
//!
//! - **Quadrant algebra**: bit-exact parent/child/sibling/ancestor
//!   predicates and constructors over Morton-encoded coordinates
//! - **Linear ids**: interleaved Morton id codec for any refinement level
//! - **Region completion**: minimal complete tiling between two quadrants,
//!   produced in sorted order with no post-sort
//! - **Pooled storage**: handle-based memory pool and pooled linked list
//!   with bounded allocation and exact balance accounting
//! - **Mesh files**: sectioned ASCII connectivity reader and printer
//!
//! # Example
//!
//! ```
//! use quadmesh::{complete_region, Forest, Quadrant};
//!
//! // Two sibling quadrants at level 1.
//! let q1 = Quadrant::new(0, 0, 1);
//! let q2 = Quadrant::new(1 << 29, 0, 1);
//!
//! let mut forest: Forest = Forest::new(1);
//! complete_region(&mut forest, &q1, true, &q2, true, 0, None);
//!
//! let tree = forest.tree(0);
//! assert_eq!(tree.len(), 2);
//! assert!(tree.is_complete());
//! ```

pub mod connectivity;
pub mod constants;
pub mod file;
pub mod forest;
pub mod quadtree;
pub mod storage;

// Re-export commonly used items
pub use connectivity::Connectivity;
pub use constants::{MAX_LEVEL, NUM_LEVELS, ROOT_LEN};
pub use file::{print_connectivity, read_connectivity, MeshFileError};
pub use forest::{Forest, InitFn, TreeId};
pub use quadtree::{complete_region, DataRef, Quadrant, Tree};
pub use storage::{DynArray, LinkPool, List, MemPool, PoolRef};
