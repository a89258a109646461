//! Data structures that assume exclusive access while mutating.

pub mod rbtree;

pub use rbtree::{Color, RBTree, RBTreeError};
