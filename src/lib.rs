//! A red-black tree kept in an index arena, plus a small harness that runs
//! read-only traversals of one tree on several threads at once.

// not concurrent
pub mod non_concurrent;

// read-only fan-out over a shared tree
pub mod concurrent_traversal;

pub mod logging;

pub use non_concurrent::rbtree::{Color, InvariantViolation, RBTree, RBTreeError, Snapshot};
