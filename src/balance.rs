//! Rebuilding a tree so that it is height balanced. Nothing in [`Tree`] calls these; balancing
//! is an explicit maintenance step for trees that degraded into long chains, e.g. after
//! inserting keys in sorted order.
//!
//! Both functions take the entries in ascending order and repeatedly make the median of the
//! remaining range the root of the subtree, so the heights of any node's subtrees differ by at
//! most one.
//!
//! # Examples
//!
//! ```
//! use assoc::balance::balance;
//! use assoc::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in 'a'..='g' {
//!     tree.insert(key, ());
//! }
//! assert_eq!(tree.height(), 7);
//!
//! balance(&mut tree);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root().map(|root| root.key()), Some('d'));
//! ```

use std::mem;

use crate::engine::Engine;
use crate::tree::{Link, Node, Order, Tree};

/// Rebalances `tree` in place, moving every value into the new shape.
pub fn balance<V, E: Engine>(tree: &mut Tree<V, E>) {
    let entries: Vec<(char, V)> = mem::take(tree).into_iter().collect();
    *tree = Tree::from_root(build(entries));
    check_balanced(tree);
}

/// Returns a balanced copy of `tree`, leaving the original untouched.
pub fn balanced<V, E>(tree: &Tree<V, E>) -> Tree<V, E>
where
    V: Clone,
    E: Engine,
{
    let entries = tree
        .items(Order::Inorder)
        .into_iter()
        .map(|(key, value)| (key, value.clone()))
        .collect();
    let balanced = Tree::from_root(build(entries));
    check_balanced(&balanced);
    balanced
}

/// Builds a subtree from entries sorted by key. The median entry becomes the root and the
/// entries on either side of it become its subtrees.
fn build<V>(mut entries: Vec<(char, V)>) -> Link<V> {
    if entries.is_empty() {
        return None;
    }

    let mid = entries.len() / 2;
    let larger = entries.split_off(mid + 1);
    let (key, value) = entries.pop()?;
    let mut node = Node::new_boxed(key, value);
    node.left = build(entries);
    node.right = build(larger);
    Some(node)
}

/// Whether every node's subtrees differ in height by at most one.
///
/// Walks the tree in postorder with an explicit stack, so long chains are fine to check.
pub fn is_balanced<V, E: Engine>(tree: &Tree<V, E>) -> bool {
    // Subtree heights in postorder; a node's right height sits on top of its left.
    let mut heights: Vec<usize> = Vec::new();
    let mut to_visit = vec![(tree.root(), false)];
    while let Some((link, children_done)) = to_visit.pop() {
        let Some(node) = link else {
            heights.push(0);
            continue;
        };
        if !children_done {
            to_visit.push((Some(node), true));
            to_visit.push((node.right(), false));
            to_visit.push((node.left(), false));
            continue;
        }
        let right = heights.pop().unwrap_or_default();
        let left = heights.pop().unwrap_or_default();
        if left.abs_diff(right) > 1 {
            return false;
        }
        heights.push(left.max(right) + 1);
    }
    true
}

fn check_balanced<V, E: Engine>(tree: &Tree<V, E>) {
    // In debug builds, assert that the rebuild established the balance invariant.
    if cfg!(debug_assertions) {
        assert!(is_balanced(tree));
    }
}
