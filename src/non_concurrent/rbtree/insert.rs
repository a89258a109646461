use log::trace;

use super::RBTree;
use super::node::{Color, NodeId, NIL};

impl<T: Ord> RBTree<T> {
    /// Inserts `value` into the tree.
    ///
    /// Equal values are not rejected: a value that compares equal to an existing
    /// one goes to its right, so duplicates end up in the right subtree of the
    /// nearest equal ancestor.
    ///
    /// Complexity: O(log(n))
    pub fn insert(&mut self, value: T) {
        let mut parent = NIL;
        let mut curr = self.root;
        let mut goes_left = false;
        while curr != NIL {
            parent = curr;
            goes_left = value < *self.arena.value(curr);
            curr = if goes_left { self.arena.left(curr) } else { self.arena.right(curr) };
        }

        let node = self.arena.alloc(value, parent);
        self.len += 1;

        if parent == NIL {
            self.root = node;
            self.arena.set_color(node, Color::Black);
            return
        } else if goes_left {
            self.arena.set_left(parent, node);
        } else {
            self.arena.set_right(parent, node);
        }

        // a red child directly under the (black) root can't break anything
        if self.arena.parent(parent) == NIL {
            return
        }

        self.insert_fixup(node);
    }

    /// Restores the red-black invariants after `z` was linked in as a red leaf.
    ///
    /// Requires `z` to have a grandparent, which `insert` checks before calling.
    fn insert_fixup(&mut self, mut z: NodeId) {
        debug_assert_ne!(self.arena.parent(self.arena.parent(z)), NIL);

        while self.arena.is_red(self.arena.parent(z)) {
            let parent = self.arena.parent(z);
            // the root is black, so a red parent always has a parent of its own
            let grandparent = self.arena.parent(parent);

            if parent == self.arena.right(grandparent) {
                let uncle = self.arena.left(grandparent);

                if self.arena.is_red(uncle) {
                    trace!("insert fixup: red uncle {uncle:?}, pushing {grandparent:?} up");
                    self.arena.set_color(uncle, Color::Black);
                    self.arena.set_color(parent, Color::Black);
                    self.arena.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if z == self.arena.left(parent) {
                        trace!("insert fixup: right-left zig-zag at {parent:?}");
                        z = parent;
                        self.rotate_right(z);
                    }
                    trace!("insert fixup: right-right at {grandparent:?}");
                    let parent = self.arena.parent(z);
                    let grandparent = self.arena.parent(parent);
                    self.arena.set_color(parent, Color::Black);
                    self.arena.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            } else {
                let uncle = self.arena.right(grandparent);

                if self.arena.is_red(uncle) {
                    trace!("insert fixup: red uncle {uncle:?}, pushing {grandparent:?} up");
                    self.arena.set_color(uncle, Color::Black);
                    self.arena.set_color(parent, Color::Black);
                    self.arena.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if z == self.arena.right(parent) {
                        trace!("insert fixup: left-right zig-zag at {parent:?}");
                        z = parent;
                        self.rotate_left(z);
                    }
                    trace!("insert fixup: left-left at {grandparent:?}");
                    let parent = self.arena.parent(z);
                    let grandparent = self.arena.parent(parent);
                    self.arena.set_color(parent, Color::Black);
                    self.arena.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            }

            if z == self.root {
                break
            }
        }

        // a red uncle can leave the root red
        let root = self.root;
        self.arena.set_color(root, Color::Black);
    }
}
