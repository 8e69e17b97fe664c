//! Walking a [`Tree`] in depth-first and breadth-first orders.
//!
//! Every walk keeps its own explicit stack or queue instead of recursing, so a tree that has
//! degenerated into a long chain is walked as safely as a balanced one. The visit orders are the
//! same as the textbook recursive definitions, always visiting left before right.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use tracing::instrument;

use crate::tree::{Node, Side, Tree};

impl Tree {
    /// All values in ascending order (left subtree, node, right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [1, 5, 3, 2, 4].into_iter().collect();
    /// assert_eq!(tree.inorder(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn inorder(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// All values with each node before its subtrees (node, left subtree, right subtree).
    ///
    /// Inserting these values into an empty tree rebuilds the exact same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [1, 5, 3, 2, 4].into_iter().collect();
    /// assert_eq!(tree.preorder(), vec![1, 5, 3, 2, 4]);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn preorder(&self) -> Vec<i32> {
        let mut values = Vec::with_capacity(self.len());
        let mut pending: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            values.push(node.value);
            // Pushed right first so the left subtree is popped first.
            pending.extend(node.right());
            pending.extend(node.left());
        }
        values
    }

    /// All values with each node after its subtrees (left subtree, right subtree, node).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [1, 5, 3, 2, 4].into_iter().collect();
    /// assert_eq!(tree.postorder(), vec![2, 4, 3, 5, 1]);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn postorder(&self) -> Vec<i32> {
        self.postorder_nodes().map(|node| node.value).collect()
    }

    /// Values one depth at a time from the root down, each depth read left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [1, 5, 3, 2, 4, 0].into_iter().collect();
    /// assert_eq!(tree.level_order(), vec![1, 0, 5, 3, 2, 4]);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn level_order(&self) -> Vec<i32> {
        self.breadth_first([Side::Left, Side::Right])
    }

    /// Values one depth at a time from the root down, each depth read right to left.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [1, 5, 3, 2, 4, 0].into_iter().collect();
    /// assert_eq!(tree.reverse_level_order(), vec![1, 5, 0, 3, 4, 2]);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn reverse_level_order(&self) -> Vec<i32> {
        self.breadth_first([Side::Right, Side::Left])
    }

    /// A FIFO walk seeded with the root. Each dequeued node's value is recorded before its
    /// children are enqueued in `child_order`.
    fn breadth_first(&self, child_order: [Side; 2]) -> Vec<i32> {
        let mut values = Vec::with_capacity(self.len());
        let mut queue: VecDeque<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            values.push(node.value);
            for side in child_order {
                queue.extend(node.child(side));
            }
        }
        values
    }

    /// A lazy iterator over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [3, 1, 2].into_iter().collect();
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), Some(3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            pending: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Nodes in post-order. Used wherever children have to be handled before their parent.
    pub(crate) fn postorder_nodes(&self) -> PostOrder<'_> {
        PostOrder {
            pending: self.root.as_deref().map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the values of a [`Tree`], created by [`Tree::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    /// Nodes whose left subtree has been (or is being) visited but which haven't been yielded.
    pending: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl FusedIterator for Iter<'_> {}

/// Iterative post-order walk over nodes. The flag records whether a node's children have already
/// been pushed.
pub(crate) struct PostOrder<'a> {
    pending: Vec<(&'a Node, bool)>,
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.pending.pop() {
            if expanded || node.is_leaf() {
                return Some(node);
            }
            self.pending.push((node, true));
            self.pending.extend(node.right().map(|right| (right, false)));
            self.pending.extend(node.left().map(|left| (left, false)));
        }
        None
    }
}
