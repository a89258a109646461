use super::RBTree;
use super::node::{NodeId, NIL};

// Both rotations keep the in-order sequence intact and never touch colors,
// recoloring is up to whichever fixup called them.
//
//        x                y
//       / \              / \
//      a   y    <==>    x   c
//         / \          / \
//        b   c        a   b

impl<T> RBTree<T> {
    /// Promotes `x.right` into `x`'s position.
    pub(super) fn rotate_left(&mut self, x: NodeId) {
        let y = self.arena.right(x);
        debug_assert_ne!(y, NIL, "rotate_left needs a right child");

        // y's left subtree moves over to x
        let b = self.arena.left(y);
        self.arena.set_right(x, b);
        self.arena.set_parent(b, x);

        self.replace_child(x, y);

        self.arena.set_left(y, x);
        self.arena.set_parent(x, y);
    }

    /// Promotes `x.left` into `x`'s position.
    pub(super) fn rotate_right(&mut self, x: NodeId) {
        let y = self.arena.left(x);
        debug_assert_ne!(y, NIL, "rotate_right needs a left child");

        let b = self.arena.right(y);
        self.arena.set_left(x, b);
        self.arena.set_parent(b, x);

        self.replace_child(x, y);

        self.arena.set_right(y, x);
        self.arena.set_parent(x, y);
    }

    /// Makes `new` take `old`'s place under `old`'s parent (or as the root).
    ///
    /// Only the downward link from the parent and `new`'s parent link change,
    /// `old` keeps pointing at its former parent.
    pub(super) fn replace_child(&mut self, old: NodeId, new: NodeId) {
        let parent = self.arena.parent(old);
        if parent == NIL {
            self.root = new;
        } else if old == self.arena.left(parent) {
            self.arena.set_left(parent, new);
        } else {
            self.arena.set_right(parent, new);
        }
        self.arena.set_parent(new, parent);
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;

    /// Builds `2 -> (1, 4 -> (3, 5))` by hand. Colors are whatever `alloc` gave, rotations ignore them.
    fn hand_built() -> (RBTree<i32>, [NodeId; 5]) {
        let mut tree = RBTree::new();
        let n2 = tree.arena.alloc(2, NIL);
        let n1 = tree.arena.alloc(1, n2);
        let n4 = tree.arena.alloc(4, n2);
        let n3 = tree.arena.alloc(3, n4);
        let n5 = tree.arena.alloc(5, n4);
        tree.arena.set_left(n2, n1);
        tree.arena.set_right(n2, n4);
        tree.arena.set_left(n4, n3);
        tree.arena.set_right(n4, n5);
        tree.root = n2;
        tree.len = 5;
        (tree, [n1, n2, n3, n4, n5])
    }

    #[test]
    fn rotate_left_at_root() {
        let (mut tree, [n1, n2, n3, n4, n5]) = hand_built();
        tree.rotate_left(n2);

        assert_eq!(tree.root, n4);
        assert_eq!(tree.arena.parent(n4), NIL);
        assert_eq!(tree.arena.left(n4), n2);
        assert_eq!(tree.arena.right(n4), n5);
        assert_eq!(tree.arena.parent(n2), n4);
        assert_eq!(tree.arena.left(n2), n1);
        assert_eq!(tree.arena.right(n2), n3);
        assert_eq!(tree.arena.parent(n3), n2);
        assert_eq!(tree.inorder(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotations_are_inverse() {
        let (mut tree, [_, n2, _, n4, _]) = hand_built();
        let before = tree.preorder();

        tree.rotate_left(n2);
        assert_eq!(tree.preorder(), [4, 2, 1, 3, 5]);
        tree.rotate_right(n4);

        assert_eq!(tree.root, n2);
        assert_eq!(tree.preorder(), before);
        assert_eq!(tree.inorder(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotate_below_root_relinks_grandparent() {
        let (mut tree, [_, n2, n3, n4, n5]) = hand_built();
        tree.rotate_right(n4);

        assert_eq!(tree.root, n2);
        assert_eq!(tree.arena.right(n2), n3);
        assert_eq!(tree.arena.parent(n3), n2);
        assert_eq!(tree.arena.right(n3), n4);
        assert_eq!(tree.arena.left(n4), NIL);
        assert_eq!(tree.arena.right(n4), n5);
        assert_eq!(tree.inorder(), [1, 2, 3, 4, 5]);
    }
}
