use std::borrow::Borrow;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::iter::FusedIterator;

use super::RBTree;
use super::node::{Color, NodeId, NIL};

impl<T> RBTree<T> {
    /// Whether some node holds a value equal to `value`.
    ///
    /// Complexity: O(log(n))
    pub fn find<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut curr = self.root;
        while curr != NIL {
            let key: &Q = self.arena.value(curr).borrow();
            if value == key {
                return true
            }
            curr = if value < key { self.arena.left(curr) } else { self.arena.right(curr) };
        }
        false
    }

    /// Alias for [`find`](Self::find).
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(value)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        match self.min_node(self.root) {
            NIL => None,
            id => Some(self.arena.value(id)),
        }
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        match self.max_node(self.root) {
            NIL => None,
            id => Some(self.arena.value(id)),
        }
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        fn go<T>(tree: &RBTree<T>, id: NodeId) -> usize {
            if id == NIL { return 0 }
            1 + go(tree, tree.arena.left(id)).max(go(tree, tree.arena.right(id)))
        }
        go(self, self.root)
    }

    /// Borrowing iterator over the values in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { tree: self, stack: Vec::new(), remaining: self.len };
        iter.push_left_spine(self.root);
        iter
    }

    // Every traversal below starts from its own fresh `Vec`, so calls never see each
    // other's output.

    /// All values, left subtree first, then the node, then the right subtree.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// All values, node first, then the left and right subtrees.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if id == NIL { continue }
            out.push(self.arena.value(id).clone());
            stack.push(self.arena.right(id));
            stack.push(self.arena.left(id));
        }
        out
    }

    /// All values, left and right subtrees first, then the node.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        // reversed (node, right, left) preorder is exactly postorder
        let mut out = Vec::with_capacity(self.len);
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if id == NIL { continue }
            out.push(self.arena.value(id).clone());
            stack.push(self.arena.left(id));
            stack.push(self.arena.right(id));
        }
        out.reverse();
        out
    }

    /// Breadth-first map from every inner node's value to its children, left then right.
    ///
    /// Leaves get no entry of their own.
    ///
    /// Complexity: O(n log(n))
    pub fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone + Ord,
    {
        let mut snapshot = Snapshot { entries: Vec::new(), index: BTreeMap::new() };
        if self.root == NIL {
            return snapshot
        }

        let mut queue = VecDeque::from([self.root]);
        while let Some(id) = queue.pop_front() {
            for child in [self.arena.left(id), self.arena.right(id)] {
                if child == NIL { continue }
                let edge = (self.arena.value(child).clone(), self.arena.color(child));
                snapshot.push(self.arena.value(id), edge);
                queue.push_back(child);
            }
        }
        snapshot
    }
}

/// Parent-to-children view of a tree, as produced by [`RBTree::snapshot`].
///
/// Entries keep the breadth-first order their parents were visited in. Equal
/// parent values share one entry, their children appended in visiting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    entries: Vec<(T, Vec<(T, Color)>)>,
    // parent value -> its position in `entries`
    index: BTreeMap<T, usize>,
}

impl<T: Clone + Ord> Snapshot<T> {
    fn push(&mut self, parent: &T, edge: (T, Color)) {
        match self.index.get(parent) {
            Some(&i) => self.entries[i].1.push(edge),
            None => {
                self.index.insert(parent.clone(), self.entries.len());
                self.entries.push((parent.clone(), vec![edge]));
            }
        }
    }
}

impl<T: Ord> Snapshot<T> {
    /// The children recorded under `parent`.
    ///
    /// Complexity: O(log(n))
    pub fn get<Q>(&self, parent: &Q) -> Option<&[(T, Color)]>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.index.get(parent).map(|&i| self.entries[i].1.as_slice())
    }
}

impl<T> Snapshot<T> {
    /// Number of parents with at least one child.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &[(T, Color)])> {
        self.entries.iter().map(|(p, children)| (p, children.as_slice()))
    }
}

impl<T: fmt::Display> fmt::Display for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (parent, children)) in self.entries.iter().enumerate() {
            if i > 0 { f.write_str(", ")? }
            write!(f, "{parent}: [")?;
            for (j, (child, color)) in children.iter().enumerate() {
                if j > 0 { f.write_str(", ")? }
                write!(f, "({child}, {color})")?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}

/// In-order iterator returned by [`RBTree::iter`].
pub struct Iter<'a, T> {
    tree: &'a RBTree<T>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<T> Iter<'_, T> {
    fn push_left_spine(&mut self, mut id: NodeId) {
        while id != NIL {
            self.stack.push(id);
            id = self.tree.arena.left(id);
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.stack.pop()?;
        let right = self.tree.arena.right(id);
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(self.tree.arena.value(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RBTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
