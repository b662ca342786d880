use super::*;
use crate::constants::{MAX_LEVEL, ROOT_LEN};
use crate::quadtree::Quadrant;

#[test]
fn test_spread_compact_roundtrip() {
  for v in [0u32, 1, 2, 3, 0xff, 0x1234_5678, u32::MAX] {
    assert_eq!(compact_bits(spread_bits(v)), v, "roundtrip of {:#x}", v);
  }
  assert_eq!(spread_bits(0xffff_ffff), 0x5555_5555_5555_5555);
  assert_eq!(compact_bits(0x5555_5555_5555_5555), 0xffff_ffff);
}

#[test]
fn test_linear_id_of_level_1_children() {
  let half = ROOT_LEN / 2;
  assert_eq!(Quadrant::new(0, 0, 1).linear_id(1), 0);
  assert_eq!(Quadrant::new(half, 0, 1).linear_id(1), 1);
  assert_eq!(Quadrant::new(0, half, 1).linear_id(1), 2);
  assert_eq!(Quadrant::new(half, half, 1).linear_id(1), 3);
}

#[test]
fn test_linear_id_roundtrip_shallow() {
  for level in 0..=6 {
    for id in 0..(1u64 << (2 * level)) {
      let q = Quadrant::from_linear_id(level, id);
      assert!(q.is_valid());
      assert_eq!(
        q.linear_id(level),
        id,
        "roundtrip of id {} at level {}",
        id,
        level
      );
    }
  }
}

#[test]
fn test_linear_id_roundtrip_deep() {
  let level = MAX_LEVEL;
  let last = (1u64 << (2 * level)) - 1;
  for id in [0, 1, 2, 3, 1u64 << 59, last - 1, last] {
    let q = Quadrant::from_linear_id(level, id);
    assert!(q.is_valid());
    assert_eq!(q.linear_id(level), id);
  }
  // The last id addresses the bottom-right unit cell.
  let q = Quadrant::from_linear_id(level, last);
  assert_eq!((q.x, q.y), (ROOT_LEN - 1, ROOT_LEN - 1));
}

#[test]
fn test_linear_id_at_coarser_level_is_ancestor_id() {
  let q = Quadrant::from_linear_id(4, 0b11_01_10_00);
  // Dropping one level drops the two low id bits.
  assert_eq!(q.linear_id(3), 0b11_01_10);
  assert_eq!(q.linear_id(2), 0b11_01);
  assert_eq!(q.linear_id(0), 0);
}

#[test]
fn test_consecutive_ids_are_next() {
  let level = 4;
  for id in 0..(1u64 << (2 * level)) - 1 {
    let q = Quadrant::from_linear_id(level, id);
    let r = Quadrant::from_linear_id(level, id + 1);
    assert!(q.is_next(&r), "id {} must precede id {}", id, id + 1);
  }
}

#[test]
fn test_child_id_is_low_id_bits() {
  for level in 1..=5 {
    for id in 0..(1u64 << (2 * level)) {
      let q = Quadrant::from_linear_id(level, id);
      assert_eq!(
        q.child_id() as u64,
        id & 3,
        "child id of id {} at level {}",
        id,
        level
      );
    }
  }
}
