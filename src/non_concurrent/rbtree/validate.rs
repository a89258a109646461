use super::RBTree;
use super::node::{NodeId, NIL};

/// A broken red-black or search-tree invariant, as reported by [`RBTree::validate`].
///
/// None of these can be produced through the public API; seeing one means a bug
/// in the tree itself.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("the sentinel is not black or has picked up links")]
    CorruptSentinel,
    #[error("the root is red")]
    RedRoot,
    #[error("the root has a parent")]
    RootHasParent,
    #[error("a red node has a red child")]
    RedRedEdge,
    #[error("black height differs between paths ({left} on the left, {right} on the right)")]
    BlackHeightMismatch { left: usize, right: usize },
    #[error("in-order sequence is not sorted")]
    OutOfOrder,
    #[error("a child's parent link doesn't point back at its parent")]
    BrokenParentLink,
    #[error("tree holds {reachable} nodes but counts {counted}")]
    LengthMismatch { reachable: usize, counted: usize },
}

impl<T: Ord> RBTree<T> {
    /// Checks every structural invariant and returns the root's black height
    /// (black nodes on any root-to-leaf path, not counting the sentinel).
    ///
    /// Complexity: O(n)
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let nil = self.arena.get(NIL);
        if !self.arena.is_black(NIL) || nil.value.is_some()
            || nil.left != NIL || nil.right != NIL || nil.parent != NIL
        {
            return Err(InvariantViolation::CorruptSentinel)
        }

        if self.root == NIL {
            return match self.len {
                0 => Ok(0),
                counted => Err(InvariantViolation::LengthMismatch { reachable: 0, counted }),
            }
        }
        if self.arena.is_red(self.root) {
            return Err(InvariantViolation::RedRoot)
        }
        if self.arena.parent(self.root) != NIL {
            return Err(InvariantViolation::RootHasParent)
        }

        let mut reachable = 0;
        let black_height = self.check_subtree(self.root, &mut reachable)?;

        if reachable != self.len {
            return Err(InvariantViolation::LengthMismatch { reachable, counted: self.len })
        }
        if !self.iter().is_sorted() {
            return Err(InvariantViolation::OutOfOrder)
        }

        Ok(black_height)
    }

    fn check_subtree(&self, id: NodeId, reachable: &mut usize) -> Result<usize, InvariantViolation> {
        if id == NIL {
            return Ok(0)
        }
        *reachable += 1;

        let (left, right) = (self.arena.left(id), self.arena.right(id));
        for child in [left, right] {
            if child == NIL { continue }
            if self.arena.parent(child) != id {
                return Err(InvariantViolation::BrokenParentLink)
            }
            if self.arena.is_red(id) && self.arena.is_red(child) {
                return Err(InvariantViolation::RedRedEdge)
            }
        }

        let left = self.check_subtree(left, reachable)?;
        let right = self.check_subtree(right, reachable)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { left, right })
        }

        Ok(left + usize::from(self.arena.is_black(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use super::InvariantViolation;

    fn sample() -> RBTree<i32> {
        let mut tree = RBTree::new();
        for v in [55, 40, 30, 35] {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn valid_tree_reports_black_height() {
        assert_eq!(RBTree::<i32>::new().validate(), Ok(0));
        assert_eq!(sample().validate(), Ok(2));
    }

    #[test]
    fn red_root_is_caught() {
        let mut tree = sample();
        let root = tree.root;
        tree.arena.set_color(root, Color::Red);
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn red_red_edge_is_caught() {
        let mut tree = sample();
        let thirty = tree.arena.left(tree.root);
        tree.arena.set_color(thirty, Color::Red);
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRedEdge));
    }

    #[test]
    fn black_height_mismatch_is_caught() {
        let mut tree = sample();
        let thirty_five = tree.arena.right(tree.arena.left(tree.root));
        tree.arena.set_color(thirty_five, Color::Black);
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::BlackHeightMismatch { left: 0, right: 1 }),
        );
    }

    #[test]
    fn broken_parent_link_is_caught() {
        let mut tree = sample();
        let fifty_five = tree.arena.right(tree.root);
        tree.arena.set_parent(fifty_five, NIL);
        assert_eq!(tree.validate(), Err(InvariantViolation::BrokenParentLink));
    }

    #[test]
    fn out_of_order_is_caught() {
        let mut tree = sample();
        let fifty_five = tree.arena.right(tree.root);
        tree.arena.replace_value(fifty_five, 1);
        assert_eq!(tree.validate(), Err(InvariantViolation::OutOfOrder));
    }
}
