use std::borrow::Borrow;

use log::{debug, trace};

use super::{RBTree, RBTreeError};
use super::node::{Color, NodeId, NIL};

impl<T: Ord> RBTree<T> {
    /// Removes one node holding `value`.
    ///
    /// When several equal values sit on the search path, the deepest one is removed
    /// (the search keeps going right after every match). Returns
    /// [`RBTreeError::NotFound`] without touching the tree if nothing matches.
    ///
    /// Complexity: O(log(n))
    pub fn delete<Q>(&mut self, value: &Q) -> Result<(), RBTreeError>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.take(value).map(drop)
    }

    /// Same as [`delete`](Self::delete), but hands back the removed value.
    pub fn take<Q>(&mut self, value: &Q) -> Result<T, RBTreeError>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.find_deepest(value) {
            NIL => {
                debug!("delete: no match among {} values", self.len);
                Err(RBTreeError::NotFound)
            }
            z => Ok(self.remove_node(z)),
        }
    }

    /// Walks the search path all the way down, remembering the last exact match.
    fn find_deepest<Q>(&self, value: &Q) -> NodeId
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut found = NIL;
        let mut curr = self.root;
        while curr != NIL {
            let key: &Q = self.arena.value(curr).borrow();
            if value == key {
                found = curr;
            }
            curr = if value < key { self.arena.left(curr) } else { self.arena.right(curr) };
        }
        found
    }
}

impl<T> RBTree<T> {
    /// Splices `z` out of the tree, rebalances, and frees its slot.
    fn remove_node(&mut self, z: NodeId) -> T {
        let mut removed_color = self.arena.color(z);
        // `x` is whatever ends up in the removed slot, possibly the sentinel,
        // so its parent is tracked on the side instead of written into `NIL`
        let x;
        let x_parent;

        if self.arena.left(z) == NIL {
            x = self.arena.right(z);
            x_parent = self.arena.parent(z);
            self.replace_child(z, x);
        } else if self.arena.right(z) == NIL {
            x = self.arena.left(z);
            x_parent = self.arena.parent(z);
            self.replace_child(z, x);
        } else {
            let successor = self.min_node(self.arena.right(z));
            removed_color = self.arena.color(successor);
            x = self.arena.right(successor);

            if self.arena.parent(successor) == z {
                x_parent = successor;
            } else {
                x_parent = self.arena.parent(successor);
                self.replace_child(successor, x);
                let z_right = self.arena.right(z);
                self.arena.set_right(successor, z_right);
                self.arena.set_parent(z_right, successor);
            }

            self.replace_child(z, successor);
            let z_left = self.arena.left(z);
            self.arena.set_left(successor, z_left);
            self.arena.set_parent(z_left, successor);
            let z_color = self.arena.color(z);
            self.arena.set_color(successor, z_color);
        }

        let value = self.arena.free(z);
        self.len -= 1;

        if removed_color == Color::Black {
            self.delete_fixup(x, x_parent);
        }

        value
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(super) fn min_node(&self, mut id: NodeId) -> NodeId {
        while self.arena.left(id) != NIL {
            id = self.arena.left(id);
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(super) fn max_node(&self, mut id: NodeId) -> NodeId {
        while self.arena.right(id) != NIL {
            id = self.arena.right(id);
        }
        id
    }

    /// Pays off the extra black carried by `x` after a black node was removed.
    ///
    /// `x_parent` is `x`'s parent; it's passed separately since `x` may be the sentinel.
    fn delete_fixup(&mut self, mut x: NodeId, mut x_parent: NodeId) {
        while x != self.root && self.arena.is_black(x) {
            if x == self.arena.left(x_parent) {
                let mut sibling = self.arena.right(x_parent);

                if self.arena.is_red(sibling) {
                    trace!("delete fixup: red sibling {sibling:?}, rotating {x_parent:?} left");
                    self.arena.set_color(sibling, Color::Black);
                    self.arena.set_color(x_parent, Color::Red);
                    self.rotate_left(x_parent);
                    sibling = self.arena.right(x_parent);
                }

                if self.arena.is_black(self.arena.left(sibling)) && self.arena.is_black(self.arena.right(sibling)) {
                    trace!("delete fixup: black nephews, moving deficit up to {x_parent:?}");
                    self.arena.set_color(sibling, Color::Red);
                    x = x_parent;
                    x_parent = self.arena.parent(x);
                } else {
                    if self.arena.is_black(self.arena.right(sibling)) {
                        trace!("delete fixup: near nephew red, rotating {sibling:?} right");
                        let near = self.arena.left(sibling);
                        self.arena.set_color(near, Color::Black);
                        self.arena.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = self.arena.right(x_parent);
                    }

                    trace!("delete fixup: far nephew red, rotating {x_parent:?} left");
                    let parent_color = self.arena.color(x_parent);
                    self.arena.set_color(sibling, parent_color);
                    self.arena.set_color(x_parent, Color::Black);
                    let far = self.arena.right(sibling);
                    self.arena.set_color(far, Color::Black);
                    self.rotate_left(x_parent);
                    x = self.root;
                    x_parent = NIL;
                }
            } else {
                let mut sibling = self.arena.left(x_parent);

                if self.arena.is_red(sibling) {
                    trace!("delete fixup: red sibling {sibling:?}, rotating {x_parent:?} right");
                    self.arena.set_color(sibling, Color::Black);
                    self.arena.set_color(x_parent, Color::Red);
                    self.rotate_right(x_parent);
                    sibling = self.arena.left(x_parent);
                }

                if self.arena.is_black(self.arena.right(sibling)) && self.arena.is_black(self.arena.left(sibling)) {
                    trace!("delete fixup: black nephews, moving deficit up to {x_parent:?}");
                    self.arena.set_color(sibling, Color::Red);
                    x = x_parent;
                    x_parent = self.arena.parent(x);
                } else {
                    if self.arena.is_black(self.arena.left(sibling)) {
                        trace!("delete fixup: near nephew red, rotating {sibling:?} left");
                        let near = self.arena.right(sibling);
                        self.arena.set_color(near, Color::Black);
                        self.arena.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = self.arena.left(x_parent);
                    }

                    trace!("delete fixup: far nephew red, rotating {x_parent:?} right");
                    let parent_color = self.arena.color(x_parent);
                    self.arena.set_color(sibling, parent_color);
                    self.arena.set_color(x_parent, Color::Black);
                    let far = self.arena.left(sibling);
                    self.arena.set_color(far, Color::Black);
                    self.rotate_right(x_parent);
                    x = self.root;
                    x_parent = NIL;
                }
            }
        }

        // covers both a red `x` absorbing the deficit and the root
        self.arena.set_color(x, Color::Black);
    }
}
