//! The owned tree itself. Every child slot is an `Option<Box<Node>>` so each node has exactly one
//! owner. There are no parent pointers: operations that need a node's parent hold a mutable
//! reference to the parent's child slot while they descend.
//!
//! The tree remembers whether it has been inverted. While it is, smaller values live on the right
//! and every descent follows that mirrored order, so lookups and mutations stay consistent with the
//! shape [`Tree::invert`] left behind.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Deletion, Insertion, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! assert_eq!(tree.insert(1), Insertion::Inserted);
//! assert!(tree.contains(1));
//!
//! // Inserting the same value again leaves the tree alone.
//! assert_eq!(tree.insert(1), Insertion::AlreadyPresent);
//! assert_eq!(tree.len(), 1);
//!
//! assert_eq!(tree.delete(1), Deletion::Deleted);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument, trace};

/// An owning pointer to a subtree. `None` marks the empty slot at the bottom of a subtree.
pub(crate) type Link = Option<Box<Node>>;

/// Which child slot of a node to follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The side `value` belongs on relative to `parent`, or `None` when they are equal. Smaller
    /// values go left unless the tree is `mirrored`.
    fn toward(value: i32, parent: i32, mirrored: bool) -> Option<Self> {
        let side = match value.cmp(&parent) {
            Ordering::Less => Side::Left,
            Ordering::Equal => return None,
            Ordering::Greater => Side::Right,
        };
        Some(if mirrored { side.opposite() } else { side })
    }

    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The result of [`Tree::insert`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Insertion {
    /// A new node holding the value was added.
    Inserted,
    /// The value was already in the tree so nothing changed.
    AlreadyPresent,
}

/// The result of [`Tree::delete`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Deletion {
    /// The node holding the value was removed.
    Deleted,
    /// The value wasn't found so nothing was deleted.
    NotFound,
}

pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new_boxed(value: i32) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A Binary Search Tree of `i32` values. This can be used for inserting, finding, and deleting
/// values as well as walking them in several orders. The tree never rebalances itself.
pub struct Tree {
    pub(crate) root: Link,
    len: usize,
    /// Set while the tree is inverted: greater values sit on the left.
    mirrored: bool,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for Tree {
    /// Builds the copy bottom-up in post-order so that deep trees don't recurse.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node>> = Vec::with_capacity(self.len);
        for node in self.postorder_nodes() {
            // The right subtree was finished last so it sits on top of the stack.
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                value: node.value,
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
            mirrored: self.mirrored,
        }
    }
}

impl PartialEq for Tree {
    /// Two trees are equal when they hold the same values in the same shape and are inverted the
    /// same number of times modulo two.
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len || self.mirrored != other.mirrored {
            return false;
        }

        let mut pending = vec![(self.root.as_deref(), other.root.as_deref())];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.value == b.value => {
                    pending.push((a.left(), b.left()));
                    pending.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Tree {}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            mirrored: false,
        }
    }

    /// The number of values in the tree. This is tracked on every insert and delete so it takes
    /// constant time.
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the tree. An inverted tree goes back to ascending order.
    ///
    /// Nodes are torn down with an explicit stack, so even a tree that has degenerated into a
    /// single long chain is dropped without deep recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree = (0..10).collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.inorder(), Vec::<i32>::new());
    /// ```
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        let mut dropped = 0usize;
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            dropped += 1;
        }
        if dropped > 0 {
            trace!(dropped, "cleared tree");
        }
        self.len = 0;
        self.mirrored = false;
    }

    /// Returns whether the tree holds the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let _ = tree.insert(3);
    ///
    /// assert!(tree.contains(3));
    /// assert!(!tree.contains(-5));
    /// ```
    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match Side::toward(value, node.value, self.mirrored) {
                Some(side) => current = node.child(side),
                None => return true,
            }
        }
        false
    }

    /// Inserts the given value into the tree unless it is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Insertion, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Insertion::Inserted);
    /// assert_eq!(tree.insert(1), Insertion::AlreadyPresent);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: i32) -> Insertion {
        let slot = descend_mut(&mut self.root, value, self.mirrored);
        if slot.is_some() {
            return Insertion::AlreadyPresent;
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        Insertion::Inserted
    }

    /// Deletes the node holding the given value. If the tree does not contain the value, nothing
    /// happens.
    ///
    /// A node with two children is replaced by its in-order successor: the leftmost node of its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Deletion, Tree};
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(2), Deletion::Deleted);
    /// assert_eq!(tree.preorder(), vec![3, 1]);
    ///
    /// assert_eq!(tree.delete(42), Deletion::NotFound);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, value: i32) -> Deletion {
        let slot = descend_mut(&mut self.root, value, self.mirrored);
        let Some(mut target) = slot.take() else {
            return Deletion::NotFound;
        };

        *slot = match (target.left.take(), target.right.take()) {
            (None, None) => {
                debug!(value, "deleting leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                debug!(value, child = child.value, "splicing sole child into deleted slot");
                Some(child)
            }
            (Some(left), Some(right)) => {
                let successor = promote_successor(left, right);
                debug!(value, successor = successor.value, "promoting in-order successor");
                Some(successor)
            }
        };
        self.len -= 1;
        Deletion::Deleted
    }

    /// The value of the leftmost node, or `None` if the tree is empty. This is the smallest value
    /// unless the tree is inverted, in which case it is the largest.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [5, 3, 8].into_iter().collect();
    /// assert_eq!(tree.min(), Some(3));
    /// assert_eq!(Tree::new().min(), None);
    /// ```
    pub fn min(&self) -> Option<i32> {
        self.extreme(Side::Left)
    }

    /// The value of the rightmost node, or `None` if the tree is empty. This is the largest value
    /// unless the tree is inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [5, 3, 8].into_iter().collect();
    /// assert_eq!(tree.max(), Some(8));
    /// ```
    pub fn max(&self) -> Option<i32> {
        self.extreme(Side::Right)
    }

    /// Follows `side` from the root until there is no child on that side.
    fn extreme(&self, side: Side) -> Option<i32> {
        let mut current = self.root.as_deref()?;
        while let Some(next) = current.child(side) {
            current = next;
        }
        Some(current.value)
    }

    /// Mirrors the tree in place by swapping the children of every node.
    ///
    /// Afterwards an in-order walk yields values in descending order and the tree is generally no
    /// longer a valid ascending BST. The tree keeps working in that mirrored order: later inserts
    /// place smaller values on the right and lookups search accordingly. Inverting twice restores
    /// the ascending tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Insertion, Tree};
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// tree.invert();
    /// assert_eq!(tree.inorder(), vec![3, 2, 1]);
    /// assert!(!tree.is_valid());
    ///
    /// assert!(tree.contains(1));
    /// assert_eq!(tree.insert(4), Insertion::Inserted);
    /// assert_eq!(tree.inorder(), vec![4, 3, 2, 1]);
    ///
    /// tree.invert();
    /// assert_eq!(tree.inorder(), vec![1, 2, 3, 4]);
    /// assert!(tree.is_valid());
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn invert(&mut self) {
        let mut pending: Vec<&mut Node> = self.root.as_deref_mut().into_iter().collect();
        while let Some(node) = pending.pop() {
            std::mem::swap(&mut node.left, &mut node.right);
            pending.extend(node.left.as_deref_mut());
            pending.extend(node.right.as_deref_mut());
        }
        self.mirrored = !self.mirrored;
    }

    /// Whether the tree has been inverted an odd number of times since it was created or cleared.
    pub fn is_inverted(&self) -> bool {
        self.mirrored
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            let _ = self.insert(value);
        }
    }
}

impl FromIterator<i32> for Tree {
    /// Inserts the values in iteration order, skipping duplicates.
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

/// Walks down from `slot` toward `value` and returns the slot that holds it, or the empty slot
/// where it would be inserted.
fn descend_mut(mut slot: &mut Link, value: i32, mirrored: bool) -> &mut Link {
    // The comparison is made through a shared borrow first so that the mutable borrow is only
    // taken when we actually move down a level.
    while let Some(side) = slot
        .as_deref()
        .and_then(|node| Side::toward(value, node.value, mirrored))
    {
        let Some(node) = slot else { break };
        slot = node.child_mut(side);
    }
    slot
}

/// Builds the replacement for a deleted node with two children. The leftmost node of `right`
/// takes the deleted node's place and adopts both subtrees. If `right` itself has no left child
/// then it is the successor: it keeps its own right subtree and adopts `left`.
fn promote_successor(left: Box<Node>, mut right: Box<Node>) -> Box<Node> {
    match take_leftmost(&mut right.left) {
        Some(mut successor) => {
            successor.left = Some(left);
            successor.right = Some(right);
            successor
        }
        None => {
            right.left = Some(left);
            right
        }
    }
}

/// Detaches the leftmost node under `slot`, relinking its right child into the slot it leaves
/// behind.
fn take_leftmost(mut slot: &mut Link) -> Option<Box<Node>> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = slot else { break };
        slot = &mut node.left;
    }

    let mut leftmost = slot.take()?;
    *slot = leftmost.right.take();
    Some(leftmost)
}
