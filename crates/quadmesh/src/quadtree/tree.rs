//! Tree - sorted linear sequence of quadrants with level accounting.
//!
//! A tree stores its quadrants in Morton order inside a [`DynArray`] and
//! keeps a per-level histogram plus the maximum level present. Two
//! invariants matter downstream:
//!
//! - **sorted**: every adjacent pair is strictly increasing under
//!   [`Quadrant::compare`]
//! - **complete**: every adjacent pair satisfies [`Quadrant::is_next`]
//!   (no gaps, no overlaps)

use std::cmp::Ordering;
use std::io::{self, Write};

use super::quadrant::Quadrant;
use crate::constants::NUM_LEVELS;
use crate::storage::DynArray;

/// Sorted quadrant sequence of one refinement tree.
pub struct Tree {
  pub(crate) quadrants: DynArray<Quadrant>,
  pub(crate) quadrants_per_level: [u32; NUM_LEVELS],
  pub(crate) maxlevel: i32,
}

impl Tree {
  /// Create an empty tree.
  pub fn new() -> Self {
    Self {
      quadrants: DynArray::new(),
      quadrants_per_level: [0; NUM_LEVELS],
      maxlevel: 0,
    }
  }

  /// Number of quadrants stored.
  #[inline]
  pub fn len(&self) -> usize {
    self.quadrants.len()
  }

  /// True if the tree holds no quadrants.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.quadrants.is_empty()
  }

  /// The `i`-th quadrant in sequence order.
  #[inline]
  pub fn quadrant(&self, i: usize) -> &Quadrant {
    &self.quadrants[i]
  }

  /// The stored quadrants as a slice, in sequence order.
  pub fn as_slice(&self) -> &[Quadrant] {
    self.quadrants.as_slice()
  }

  /// Maximum level currently present (0 for an empty tree).
  #[inline]
  pub fn maxlevel(&self) -> i32 {
    self.maxlevel
  }

  /// Per-level quadrant counts.
  pub fn quadrants_per_level(&self) -> &[u32; NUM_LEVELS] {
    &self.quadrants_per_level
  }

  /// Append a quadrant, updating the level histogram and maxlevel.
  ///
  /// Appending keeps the invariants only if `q` follows the current last
  /// quadrant in Z-order; callers are responsible for that.
  pub(crate) fn push(&mut self, q: Quadrant) {
    debug_assert!(q.is_valid());
    self.quadrants_per_level[q.level as usize] += 1;
    self.maxlevel = self.maxlevel.max(q.level);
    self.quadrants.push(q);
  }

  /// True if every adjacent pair is strictly increasing in Z-order.
  pub fn is_sorted(&self) -> bool {
    self
      .quadrants
      .as_slice()
      .windows(2)
      .all(|w| w[0].compare(&w[1]) == Ordering::Less)
  }

  /// True if every adjacent pair is an immediate Z-order successor
  /// (sorted, gap-free, overlap-free).
  pub fn is_complete(&self) -> bool {
    self
      .quadrants
      .as_slice()
      .windows(2)
      .all(|w| w[0].is_next(&w[1]))
  }

  /// Dump the sequence to `out`, one quadrant per line.
  ///
  /// Each line shows the coordinates and level in hex/decimal, then a
  /// relation code against the predecessor:
  ///
  /// - `R`    out of order (predecessor compares greater)
  /// - `I`    identical to the predecessor
  /// - `S<k>` sibling of the predecessor, with child id `k`
  /// - `C<k>` predecessor is the parent
  /// - `D`    predecessor is a non-parent ancestor
  /// - `N<k>` immediate Z-order successor of the predecessor
  /// - `Q<k>` none of the above (also used for the first quadrant)
  ///
  /// With `id` set, every line is prefixed `[id] `.
  pub fn print(&self, id: Option<u32>, out: &mut dyn Write) -> io::Result<()> {
    let prefix = match id {
      Some(id) => format!("[{}] ", id),
      None => String::new(),
    };

    let mut prev: Option<&Quadrant> = None;
    for q in self.quadrants.iter() {
      let childid = if q.level > 0 { q.child_id() } else { 0 };
      write!(out, "{}{:#x} {:#x} {}", prefix, q.x, q.y, q.level)?;
      match prev {
        None => write!(out, " Q{}", childid)?,
        Some(p) => match p.compare(q) {
          Ordering::Greater => write!(out, " R")?,
          Ordering::Equal => write!(out, " I")?,
          Ordering::Less => {
            if p.is_sibling(q) {
              write!(out, " S{}", childid)?;
            } else if p.is_parent_of(q) {
              write!(out, " C{}", childid)?;
            } else if p.is_ancestor_of(q) {
              write!(out, " D")?;
            } else if p.is_next(q) {
              write!(out, " N{}", childid)?;
            } else {
              write!(out, " Q{}", childid)?;
            }
          }
        },
      }
      writeln!(out)?;
      prev = Some(q);
    }

    Ok(())
  }
}

impl Default for Tree {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
