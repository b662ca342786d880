//! Lattice constants for quadrant coordinates.
//!
//! Quadrant coordinates live on a fixed integer lattice. The root cell
//! spans `[0, ROOT_LEN)` on both axes and every refinement level halves
//! the cell side length:
//!
//! ```text
//! level 0:  ┌──────────────┐   side = ROOT_LEN       = 2^30
//! level 1:  ┌──────┬───────┐   side = ROOT_LEN / 2   = 2^29
//! level l:                     side = 2^(MAX_LEVEL - l)
//! ```
//!
//! A quadrant at level `l` is valid only if the low `MAX_LEVEL - l` bits
//! of both coordinates are zero (its origin is aligned to its own cell
//! size).
//!
//! # Why MAX_LEVEL = 30?
//!
//! - coordinates stay within `i32` (`ROOT_LEN = 2^30`)
//! - Morton ids at the deepest level need `2 * 30 = 60` bits and stay
//!   within `u64`
//!
//! Widening the depth requires widening both types together.

/// Deepest refinement level a quadrant may have.
pub const MAX_LEVEL: i32 = 30;

/// Number of distinct levels, `0..=MAX_LEVEL`.
pub const NUM_LEVELS: usize = (MAX_LEVEL + 1) as usize;

/// Side length of the root cell in lattice units.
pub const ROOT_LEN: i32 = 1 << MAX_LEVEL;

/// Side length of a cell at `level`.
#[inline]
pub fn cell_len(level: i32) -> i32 {
  debug_assert!((0..=MAX_LEVEL).contains(&level), "level out of range");
  1 << (MAX_LEVEL - level)
}

/// Origin coordinate of the last cell at `level`.
#[inline]
pub fn last_offset(level: i32) -> i32 {
  ROOT_LEN - cell_len(level)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
