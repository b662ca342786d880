//! Pooled-memory substrate for quadrant storage.
//!
//! Three building blocks, used by the layers above:
//!
//! - [`DynArray`]: contiguous resizable array of equal-size elements.
//!   Element addresses are NOT stable across resize.
//! - [`MemPool`]: pool of equal-size cells addressed by opaque handles
//!   that stay valid for the pool's lifetime. Freed cells are buffered
//!   and transparently reused.
//! - [`List`]: singly-linked list whose links are drawn from a
//!   [`MemPool`], either owned by the list or borrowed from a caller.
//!
//! None of these are internally synchronized; callers must not invoke
//! two operations on the same instance concurrently.

pub mod array;
pub mod list;
pub mod pool;

// Re-exports
pub use array::DynArray;
pub use list::{LinkPool, List};
pub use pool::{MemPool, PoolRef};
