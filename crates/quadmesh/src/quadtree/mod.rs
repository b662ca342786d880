//! Quadtree core: quadrant algebra, linear trees, region completion.
//!
//! A quadrant is a value type identified by its lattice coordinates and
//! refinement level; the tree structure is implicit in the coordinates.
//! Trees store their quadrants as a sorted linear sequence in Morton
//! (Z-order) order.
//!
//! # Module Structure
//!
//! - [`quadrant`]: `Quadrant` - the encoded-coordinate value type and its
//!   predicates and constructors
//! - [`morton`]: linear id codec (interleaved Morton ids per level)
//! - [`tree`]: `Tree` - quadrant sequence with sortedness/completeness
//!   invariants and a diagnostic dump
//! - [`complete`]: region completion between two bounding quadrants

pub mod complete;
pub mod morton;
pub mod quadrant;
pub mod tree;

// Re-exports
pub use complete::complete_region;
pub use quadrant::{DataRef, Quadrant};
pub use tree::Tree;
