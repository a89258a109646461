//! Red-black tree over an index arena.
//!
//! Nodes never hold pointers: every link is an index into the tree's arena, and
//! a single shared sentinel slot stands in for "no child" / "no parent".
//!
//! Mutation goes through [`RBTree::insert`] and [`RBTree::delete`], which run the
//! usual bottom-up fixups to keep the tree balanced. Everything else only reads.

use std::fmt::{self, Debug};

mod insert;
mod node;
mod remove;
mod rotate;
mod traverse;
mod validate;

use node::{Arena, NodeId, NIL};

pub use node::Color;
pub use traverse::{Iter, Snapshot};
pub use validate::InvariantViolation;

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RBTreeError {
    #[error("value not found in tree")]
    NotFound,
}

/// An ordered multiset backed by a red-black tree.
///
/// Duplicate values are allowed. The tree is single-threaded: it does no locking
/// of its own, but a tree that isn't being mutated can be shared by any number
/// of readers (`&RBTree<T>` is `Send` when `T: Sync`).
pub struct RBTree<T> {
    arena: Arena<T>,
    root: NodeId,
    len: usize,
}

impl<T> RBTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: NIL,
            len: 0,
        }
    }

    /// The amount of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every value, keeping only the sentinel.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NIL;
        self.len = 0;
    }
}

impl<T> Default for RBTree<T> {
    fn default() -> Self {
        RBTree::new()
    }
}

impl<T: Debug> Debug for RBTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
