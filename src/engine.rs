//! The interface shared by the two ways of walking a [`Tree`][crate::tree::Tree]. Every
//! operation works on a [`Link`] (the owning pointer to a subtree) so that the same code serves
//! both the root of the tree and any subtree below it.

use crate::tree::{Items, Link, Node};

/// A strategy for searching, modifying and traversing a tree of [`Node`]s.
///
/// Implementations must be observably equivalent: for the same sequence of calls they must
/// leave identically shaped trees behind and produce identical traversal output.
pub trait Engine {
    /// Finds the value stored at `key`, descending left for smaller keys and right for larger.
    fn search<V>(link: &Link<V>, key: char) -> Option<&V>;

    /// Replaces the value at `key` or appends a new leaf where the search for `key` ended.
    fn insert<V>(link: &mut Link<V>, key: char, value: V);

    /// Removes the node with `key` and returns its value. Nothing happens when `key` is absent.
    fn delete<V>(link: &mut Link<V>, key: char) -> Option<V>;

    /// Moves the key and value of the rightmost node of `target`'s left subtree into `target`,
    /// unlinks that rightmost node and returns `target`'s previous value. The rightmost node's
    /// own left subtree is handed to its former parent.
    ///
    /// Returns `None` and leaves `target` untouched if it has no left subtree.
    fn replace_by_rightmost<V>(target: &mut Node<V>) -> Option<V>;

    /// Frees every node below `link` and leaves it empty.
    fn dispose<V>(link: &mut Link<V>);

    /// Appends node, left subtree, right subtree.
    fn preorder<'a, V>(link: &'a Link<V>, items: &mut Items<'a, V>);

    /// Appends left subtree, node, right subtree.
    fn inorder<'a, V>(link: &'a Link<V>, items: &mut Items<'a, V>);

    /// Appends left subtree, right subtree, node.
    fn postorder<'a, V>(link: &'a Link<V>, items: &mut Items<'a, V>);
}

/// Unlinks the node that `link` points at. A node with at most one child is replaced by that
/// child; a node with two children is overwritten with its in-order predecessor instead.
pub(crate) fn unlink<E: Engine, V>(link: &mut Link<V>) -> Option<V> {
    let node = link.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        return E::replace_by_rightmost(node);
    }

    let mut removed = link.take()?;
    *link = removed.left.take().or_else(|| removed.right.take());
    Some(removed.value)
}
