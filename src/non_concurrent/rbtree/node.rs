//! Arena storage for tree nodes.
//!
//! Parent and child links point both ways, so nodes live in a flat `Vec` and
//! refer to each other by index. Slot 0 is the sentinel ("nil"): it is always
//! black, carries no value, and stands in for every missing child and for the
//! root's missing parent. Code that walks the tree never asks "is there a child",
//! only "is this child `NIL`".

use std::fmt;

/// The color of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("Red"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Index of a node inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct NodeId(usize);

/// The sentinel slot.
pub(super) const NIL: NodeId = NodeId(0);

pub(super) struct Node<T> {
    // `None` only for the sentinel and for slots sitting in the free list
    pub(super) value: Option<T>,
    pub(super) color: Color,
    pub(super) parent: NodeId,
    pub(super) left: NodeId,
    pub(super) right: NodeId,
}

impl<T> Node<T> {
    const fn sentinel() -> Self {
        Self {
            value: None,
            color: Color::Black,
            parent: NIL,
            left: NIL,
            right: NIL,
        }
    }
}

/// The node arena plus a free list of recycled slots.
pub(super) struct Arena<T> {
    nodes: Vec<Node<T>>,
    free: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(super) fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
        }
    }

    /// Allocates a red node with both children pointing at the sentinel.
    pub(super) fn alloc(&mut self, value: T, parent: NodeId) -> NodeId {
        let node = Node {
            value: Some(value),
            color: Color::Red,
            parent,
            left: NIL,
            right: NIL,
        };

        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Unlinks a slot from the arena and hands back the value it held.
    ///
    /// The caller must already have spliced `id` out of the tree.
    pub(super) fn free(&mut self, id: NodeId) -> T {
        debug_assert_ne!(id, NIL, "the sentinel is never freed");
        let node = &mut self.nodes[id.0];
        node.parent = NIL;
        node.left = NIL;
        node.right = NIL;
        node.color = Color::Black;
        self.free.push(id);
        match node.value.take() {
            Some(value) => value,
            None => unreachable!("slot {id:?} was freed twice"),
        }
    }

    /// Drops every slot except the sentinel.
    pub(super) fn clear(&mut self) {
        self.nodes.truncate(1);
        self.free.clear();
    }

    /// Number of slots in the arena, including the sentinel and free slots.
    #[cfg(test)]
    pub(super) fn capacity(&self) -> usize {
        self.nodes.len()
    }

    pub(super) fn get(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        debug_assert_ne!(id, NIL, "the sentinel is never mutated");
        &mut self.nodes[id.0]
    }

    // NOTE: all of these read the sentinel just fine, that's the whole point of it

    pub(super) fn left(&self, id: NodeId) -> NodeId {
        self.get(id).left
    }

    pub(super) fn right(&self, id: NodeId) -> NodeId {
        self.get(id).right
    }

    pub(super) fn parent(&self, id: NodeId) -> NodeId {
        self.get(id).parent
    }

    pub(super) fn color(&self, id: NodeId) -> Color {
        self.get(id).color
    }

    pub(super) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    pub(super) fn is_black(&self, id: NodeId) -> bool {
        self.color(id) == Color::Black
    }

    /// The value stored at `id`. Panics on the sentinel.
    pub(super) fn value(&self, id: NodeId) -> &T {
        match &self.get(id).value {
            Some(value) => value,
            None => unreachable!("slot {id:?} holds no value"),
        }
    }

    #[cfg(test)]
    pub(super) fn replace_value(&mut self, id: NodeId, value: T) -> Option<T> {
        self.get_mut(id).value.replace(value)
    }

    pub(super) fn set_left(&mut self, id: NodeId, left: NodeId) {
        self.get_mut(id).left = left;
    }

    pub(super) fn set_right(&mut self, id: NodeId, right: NodeId) {
        self.get_mut(id).right = right;
    }

    /// Repoints `id`'s parent link. Setting the parent of the sentinel is a no-op,
    /// so callers can re-parent a child without checking whether it exists.
    pub(super) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if id != NIL {
            self.get_mut(id).parent = parent;
        }
    }

    pub(super) fn set_color(&mut self, id: NodeId, color: Color) {
        if id == NIL {
            debug_assert_eq!(color, Color::Black, "the sentinel can't be painted red");
            return
        }
        self.get_mut(id).color = color;
    }
}
