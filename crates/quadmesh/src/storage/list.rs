//! List - singly-linked list over pool-allocated links.
//!
//! Each link is a cell in a [`LinkPool`]; the list either owns a private
//! pool or borrows one from the caller, so several short-lived lists can
//! recycle the same link cells. Dropping a non-empty list returns every
//! remaining link to its pool.

use super::pool::{MemPool, PoolRef};

/// One link: the payload plus the handle of the next link.
pub struct Link<T> {
  data: Option<T>,
  next: Option<PoolRef>,
}

/// Pool that list links are drawn from.
pub type LinkPool<T> = MemPool<Link<T>>;

enum Links<'p, T> {
  Owned(LinkPool<T>),
  Borrowed(&'p mut LinkPool<T>),
}

impl<T> Links<'_, T> {
  fn pool(&mut self) -> &mut LinkPool<T> {
    match self {
      Links::Owned(pool) => pool,
      Links::Borrowed(pool) => &mut **pool,
    }
  }

  fn pool_ref(&self) -> &LinkPool<T> {
    match self {
      Links::Owned(pool) => pool,
      Links::Borrowed(pool) => &**pool,
    }
  }
}

/// Singly-linked list with pooled links.
pub struct List<'p, T> {
  links: Links<'p, T>,
  first: Option<PoolRef>,
  last: Option<PoolRef>,
  count: usize,
}

impl<T> List<'static, T> {
  /// Create a list owning a private link pool.
  pub fn new() -> Self {
    Self {
      links: Links::Owned(LinkPool::new()),
      first: None,
      last: None,
      count: 0,
    }
  }
}

impl<T> Default for List<'static, T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'p, T> List<'p, T> {
  /// Create a list borrowing `pool` for its links.
  ///
  /// The pool is not destroyed with the list; links the list still holds
  /// at drop time are returned to it.
  pub fn with_pool(pool: &'p mut LinkPool<T>) -> Self {
    Self {
      links: Links::Borrowed(pool),
      first: None,
      last: None,
      count: 0,
    }
  }

  /// Number of elements in the list.
  #[inline]
  pub fn len(&self) -> usize {
    self.count
  }

  /// True if the list holds no elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Peek at the front element.
  pub fn first(&self) -> Option<&T> {
    self.first.map(|slot| self.peek(slot))
  }

  /// Peek at the back element.
  pub fn last(&self) -> Option<&T> {
    self.last.map(|slot| self.peek(slot))
  }

  /// Insert `value` at the front. Returns the new link's handle.
  pub fn push_front(&mut self, value: T) -> PoolRef {
    let slot = self.links.pool().alloc(Link {
      data: Some(value),
      next: self.first,
    });
    self.first = Some(slot);
    if self.last.is_none() {
      self.last = Some(slot);
    }
    self.count += 1;
    slot
  }

  /// Insert `value` at the back. Returns the new link's handle.
  pub fn push_back(&mut self, value: T) -> PoolRef {
    let slot = self.links.pool().alloc(Link {
      data: Some(value),
      next: None,
    });
    match self.last {
      Some(prev) => self.links.pool().get_mut(prev).next = Some(slot),
      None => self.first = Some(slot),
    }
    self.last = Some(slot);
    self.count += 1;
    slot
  }

  /// Insert `value` directly after the link `after`. Returns the new
  /// link's handle. `after` must be a live link of this list.
  pub fn insert_after(&mut self, after: PoolRef, value: T) -> PoolRef {
    let next = self.links.pool().get(after).next;
    let slot = self.links.pool().alloc(Link {
      data: Some(value),
      next,
    });
    self.links.pool().get_mut(after).next = Some(slot);
    if self.last == Some(after) {
      self.last = Some(slot);
    }
    self.count += 1;
    slot
  }

  /// Remove and return the front element, releasing its link.
  pub fn pop_front(&mut self) -> Option<T> {
    let slot = self.first?;
    let pool = self.links.pool();
    let link = pool.get_mut(slot);
    let data = link.data.take().expect("live link holds a value");
    self.first = link.next;
    pool.free(slot);
    if self.first.is_none() {
      self.last = None;
    }
    self.count -= 1;
    Some(data)
  }

  fn peek(&self, slot: PoolRef) -> &T {
    self
      .links
      .pool_ref()
      .get(slot)
      .data
      .as_ref()
      .expect("live link holds a value")
  }
}

impl<T> Drop for List<'_, T> {
  fn drop(&mut self) {
    while self.pop_front().is_some() {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_push_pop_order() {
    let mut list = List::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);
    assert_eq!(list.len(), 3);
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.last(), Some(&3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
  }

  #[test]
  fn test_insert_after() {
    let mut list = List::new();
    let a = list.push_back('a');
    list.push_back('c');
    list.insert_after(a, 'b');
    assert_eq!(list.pop_front(), Some('a'));
    assert_eq!(list.pop_front(), Some('b'));
    assert_eq!(list.pop_front(), Some('c'));
  }

  #[test]
  fn test_insert_after_tail_updates_last() {
    let mut list = List::new();
    list.push_back(1);
    let tail = list.push_back(2);
    list.insert_after(tail, 3);
    assert_eq!(list.last(), Some(&3));
    list.push_back(4);
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), Some(4));
  }

  #[test]
  fn test_borrowed_pool_balance() {
    let mut pool = LinkPool::new();
    {
      let mut list = List::with_pool(&mut pool);
      for i in 0..10 {
        list.push_back(i);
      }
      assert_eq!(list.pop_front(), Some(0));
      // 9 links still held; returned on drop.
    }
    assert_eq!(pool.len(), 0, "dropping the list must return every link");
  }

  #[test]
  fn test_links_recycled_across_lists() {
    let mut pool = LinkPool::new();
    {
      let mut list = List::with_pool(&mut pool);
      list.push_back(1);
      list.push_back(2);
      while list.pop_front().is_some() {}
    }
    {
      let mut list = List::with_pool(&mut pool);
      list.push_front(3);
      assert_eq!(list.pop_front(), Some(3));
    }
    assert_eq!(pool.len(), 0);
  }
}
