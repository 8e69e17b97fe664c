//! This crate exposes an owned Binary Search Tree (BST) of integers, mostly
//! for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and may have up to two child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)`. This tree does not
//! rebalance itself, so inserting values in sorted order produces a chain
//! whose height equals its size. How far a tree is from balanced can be
//! *reported* with [`Tree::min_height`], [`Tree::max_height`] and
//! [`Tree::is_balanced`] but is never corrected.
//!
//! BSTs naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree. [`Tree`] offers that
//! order along with pre-order, post-order and two breadth-first orders.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Deletion, Insertion, Tree};
//!
//! let mut tree = Tree::new();
//! for value in [1, 5, 3, 2, 4] {
//!     assert_eq!(tree.insert(value), Insertion::Inserted);
//! }
//!
//! // Values come back in ascending order.
//! assert_eq!(tree.inorder(), vec![1, 2, 3, 4, 5]);
//!
//! // Duplicates are reported, not stored.
//! assert_eq!(tree.insert(3), Insertion::AlreadyPresent);
//! assert_eq!(tree.len(), 5);
//!
//! assert_eq!(tree.delete(1), Deletion::Deleted);
//! assert_eq!(tree.delete(1), Deletion::NotFound);
//! assert_eq!(tree.min(), Some(2));
//! ```
//!
//! ## Features
//!
//! * `serde`: implements `Serialize`/`Deserialize` for [`Tree`] as the
//!   sequence of its values in pre-order.

#![deny(missing_docs, unsafe_code)]

mod shape;
mod traverse;
mod tree;

#[cfg(feature = "serde")]
mod ser;

pub use shape::{OrderViolation, NO_HEIGHT};
pub use traverse::Iter;
pub use tree::{Deletion, Insertion, Tree};
