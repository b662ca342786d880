use super::*;

#[test]
fn test_root_len_is_power_of_two() {
  assert!(ROOT_LEN.is_positive());
  assert!((ROOT_LEN as u32).is_power_of_two());
  assert_eq!(ROOT_LEN, 1 << 30);
}

#[test]
fn test_cell_len_halves_per_level() {
  assert_eq!(cell_len(0), ROOT_LEN);
  for level in 1..=MAX_LEVEL {
    assert_eq!(
      cell_len(level) * 2,
      cell_len(level - 1),
      "cell at level {} should be half its parent",
      level
    );
  }
  assert_eq!(cell_len(MAX_LEVEL), 1);
}

#[test]
fn test_last_offset() {
  assert_eq!(last_offset(0), 0);
  assert_eq!(last_offset(1), ROOT_LEN / 2);
  assert_eq!(last_offset(MAX_LEVEL), ROOT_LEN - 1);
}
