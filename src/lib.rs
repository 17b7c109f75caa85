//! This crate exposes two hand-built associative containers: an unbalanced Binary Search Tree
//! (BST) keyed by `char`, and a hash table with separate chaining keyed by strings.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. The [`tree::Tree`] here does not rebalance itself, so inserting
//! keys in sorted order degrades it to a linked list; [`balance`] rebuilds it on request.
//! All operations come in two flavours, [`recursive::Recursive`] and [`iterative::Iterative`],
//! which always produce the same trees.
//!
//! ## Hash Table
//!
//! [`hashtable::HashTable`] hashes each key into one of a fixed number of slots. Keys that hash
//! to the same slot are chained in a singly linked list, newest first.
//!
//! Neither structure is synchronized. Share them across threads behind a lock.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balance;
pub mod content;
pub mod engine;
pub mod error;
pub mod hashtable;
pub mod iterative;
pub mod letters;
pub mod recursive;
pub mod tree;

pub use error::TableError;
