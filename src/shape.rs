//! Reporting on the shape of a [`Tree`]: how tall it is, whether it is balanced and whether it
//! still satisfies the BST ordering.
//!
//! Heights count edges from the root down to a leaf, a node with no children. A single node has
//! height `0` and an empty tree has no height at all, reported as [`NO_HEIGHT`].

use std::collections::VecDeque;

use thiserror::Error;
use tracing::instrument;

use crate::tree::{Node, Side, Tree};

/// The height reported for an empty tree.
pub const NO_HEIGHT: isize = -1;

/// Why [`Tree::validate`] rejected a tree.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum OrderViolation {
    /// A node in the left subtree of `ancestor` is not less than it.
    #[error("{value} is in the left subtree of {ancestor} but is not less than it")]
    LeftNotLess {
        /// The node whose left subtree holds `value`.
        ancestor: i32,
        /// The misplaced value.
        value: i32,
    },
    /// A node in the right subtree of `ancestor` is not greater than it.
    #[error("{value} is in the right subtree of {ancestor} but is not greater than it")]
    RightNotGreater {
        /// The node whose right subtree holds `value`.
        ancestor: i32,
        /// The misplaced value.
        value: i32,
    },
    /// The recorded size disagrees with the number of reachable nodes.
    #[error("tree records {recorded} values but {reachable} nodes are reachable")]
    CountMismatch {
        /// What [`Tree::len`] reports.
        recorded: usize,
        /// How many nodes a walk from the root finds.
        reachable: usize,
    },
}

/// The nearest ancestor a node has to stay on one side of.
#[derive(Clone, Copy)]
struct Bound {
    ancestor: i32,
    side: Side,
}

impl Bound {
    fn check(self, value: i32) -> Result<(), OrderViolation> {
        let ancestor = self.ancestor;
        match self.side {
            Side::Left if value >= ancestor => Err(OrderViolation::LeftNotLess { ancestor, value }),
            Side::Right if value <= ancestor => {
                Err(OrderViolation::RightNotGreater { ancestor, value })
            }
            _ => Ok(()),
        }
    }
}

impl Tree {
    /// The number of edges from the root to the farthest leaf, or [`NO_HEIGHT`] if the tree is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Tree, NO_HEIGHT};
    ///
    /// assert_eq!(Tree::new().max_height(), NO_HEIGHT);
    ///
    /// let tree: Tree = [1, 5, 3, 2, 4, 0].into_iter().collect();
    /// assert_eq!(tree.max_height(), 3);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn max_height(&self) -> isize {
        self.leaf_depths().map_or(NO_HEIGHT, |(_, max)| max as isize)
    }

    /// The number of edges from the root to the nearest leaf, or [`NO_HEIGHT`] if the tree is
    /// empty.
    ///
    /// The tree is searched breadth-first and the search stops at the first leaf it meets.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// // 0 is a leaf one edge below the root.
    /// let tree: Tree = [1, 5, 3, 2, 4, 0].into_iter().collect();
    /// assert_eq!(tree.min_height(), 1);
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn min_height(&self) -> isize {
        let mut queue: VecDeque<(&Node, usize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = queue.pop_front() {
            if node.is_leaf() {
                return depth as isize;
            }
            queue.extend(node.left().map(|left| (left, depth + 1)));
            queue.extend(node.right().map(|right| (right, depth + 1)));
        }
        NO_HEIGHT
    }

    /// Whether the nearest and farthest leaves are at most one level apart. An empty tree is
    /// balanced.
    ///
    /// Note this compares leaf depths across the whole tree. It is looser than the AVL rule,
    /// which compares the heights of the two subtrees of every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// assert!(Tree::new().is_balanced());
    ///
    /// // The leaf 0 sits one edge below the root while 2 and 4 sit three edges below.
    /// let lopsided: Tree = [1, 5, 3, 2, 4, 0].into_iter().collect();
    /// assert!(!lopsided.is_balanced());
    ///
    /// // A bare chain has a single leaf, so its nearest and farthest leaves coincide.
    /// let chain: Tree = [1, 2, 3].into_iter().collect();
    /// assert!(chain.is_balanced());
    ///
    /// let full: Tree = [2, 1, 3].into_iter().collect();
    /// assert!(full.is_balanced());
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn is_balanced(&self) -> bool {
        self.leaf_depths().is_none_or(|(min, max)| max - min <= 1)
    }

    /// The depths of the nearest and farthest leaves, found in a single depth-first pass.
    fn leaf_depths(&self) -> Option<(usize, usize)> {
        let mut pending: Vec<(&Node, usize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        let mut depths: Option<(usize, usize)> = None;
        while let Some((node, depth)) = pending.pop() {
            if node.is_leaf() {
                depths = Some(match depths {
                    Some((min, max)) => (min.min(depth), max.max(depth)),
                    None => (depth, depth),
                });
                continue;
            }
            pending.extend(node.right().map(|right| (right, depth + 1)));
            pending.extend(node.left().map(|left| (left, depth + 1)));
        }
        depths
    }

    /// Checks that every node is on the correct side of each of its ancestors and that
    /// [`Tree::len`] matches the number of nodes.
    ///
    /// This always holds for trees built with [`Tree::insert`] and [`Tree::delete`]. It stops
    /// holding after [`Tree::invert`] mirrors a tree with more than one node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{OrderViolation, Tree};
    ///
    /// let mut tree: Tree = [2, 1].into_iter().collect();
    /// assert_eq!(tree.validate(), Ok(()));
    ///
    /// tree.invert();
    /// assert_eq!(
    ///     tree.validate(),
    ///     Err(OrderViolation::RightNotGreater { ancestor: 2, value: 1 })
    /// );
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn validate(&self) -> Result<(), OrderViolation> {
        // Each node is carried along with the tightest bound on either side. Checking a child
        // against its parent alone would miss a grandchild that crosses its grandparent.
        let mut pending: Vec<(&Node, Option<Bound>, Option<Bound>)> = self
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();
        let mut reachable = 0usize;
        while let Some((node, upper, lower)) = pending.pop() {
            reachable += 1;
            if let Some(upper) = upper {
                upper.check(node.value)?;
            }
            if let Some(lower) = lower {
                lower.check(node.value)?;
            }

            let below = |side| {
                Some(Bound {
                    ancestor: node.value,
                    side,
                })
            };
            if let Some(right) = node.right() {
                pending.push((right, upper, below(Side::Right)));
            }
            if let Some(left) = node.left() {
                pending.push((left, below(Side::Left), lower));
            }
        }

        if reachable != self.len() {
            return Err(OrderViolation::CountMismatch {
                recorded: self.len(),
                reachable,
            });
        }
        Ok(())
    }

    /// Whether [`Tree::validate`] accepts the tree.
    ///
    /// This is stricter than comparing each child with its parent alone. A node that sits on the
    /// correct side of its parent but the wrong side of a higher ancestor is rejected, and so is a
    /// tree whose [`Tree::len`] disagrees with its node count.
    ///
    /// The check is always against ascending order, so an inverted tree with more than one node
    /// is reported invalid even though [`Tree::insert`] and friends keep working on it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree = [4, 2, 6, 1, 3].into_iter().collect();
    /// assert!(tree.is_valid());
    ///
    /// tree.invert();
    /// assert!(!tree.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
