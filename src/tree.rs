//! An unbalanced Binary Search Tree keyed by `char`. The tree owns its nodes through plain
//! `Box`es so every node has exactly one owner and there are no parent pointers. Lookup, insert,
//! delete, dispose and the three traversals are delegated to an [`Engine`], which is either the
//! [`Iterative`] (default) or the [`Recursive`][crate::recursive::Recursive] strategy.
//!
//! # Examples
//!
//! ```
//! use assoc::tree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search('b'), None);
//!
//! tree.insert('b', 2);
//! tree.insert('a', 1);
//! tree.insert('c', 3);
//! assert_eq!(tree.search('b'), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert('b', 20);
//! assert_eq!(tree.search('b'), Some(&20));
//!
//! // Inorder traversal yields ascending keys.
//! assert_eq!(tree.items(Order::Inorder), vec![('a', &1), ('b', &20), ('c', &3)]);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete('b'), Some(20));
//! assert_eq!(tree.search('b'), None);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::engine::Engine;
use crate::iterative::Iterative;

/// A possibly empty subtree. `None` is the empty tree.
pub type Link<V> = Option<Box<Node<V>>>;

/// The output sequence of a traversal: keys and references to their values in visiting order.
pub type Items<'a, V> = Vec<(char, &'a V)>;

/// The order in which a traversal visits the nodes of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then node, then right subtree. Keys come out ascending.
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
}

/// One key and its value plus the two subtrees the node owns.
pub struct Node<V> {
    pub(crate) key: char,
    pub(crate) value: V,
    pub(crate) left: Link<V>,
    pub(crate) right: Link<V>,
}

impl<V> Node<V> {
    pub(crate) fn new_boxed(key: char, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// The key this node is ordered by.
    pub fn key(&self) -> char {
        self.key
    }

    /// The value stored at this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The root of the left subtree, holding only smaller keys.
    pub fn left(&self) -> Option<&Node<V>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding only larger keys.
    pub fn right(&self) -> Option<&Node<V>> {
        self.right.as_deref()
    }
}

impl<V> fmt::Debug for Node<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

/// A Binary Search Tree mapping `char` keys to values of type `V`. No rebalancing happens on
/// insert or delete; see [`balance`][crate::balance::balance] for an explicit rebuild.
pub struct Tree<V, E: Engine = Iterative> {
    root: Link<V>,
    engine: PhantomData<E>,
}

impl<V, E: Engine> Default for Tree<V, E> {
    fn default() -> Self {
        Self::from_root(None)
    }
}

/// Dropping always frees the nodes with an explicit stack, whatever the engine.
impl<V, E: Engine> Drop for Tree<V, E> {
    fn drop(&mut self) {
        Iterative::dispose(&mut self.root);
    }
}

/// Cloning replays a preorder traversal into an empty tree, which reproduces the exact shape.
impl<V, E> Clone for Tree<V, E>
where
    V: Clone,
    E: Engine,
{
    fn clone(&self) -> Self {
        let mut tree = Self::default();
        for (key, value) in self.items(Order::Preorder) {
            tree.insert(key, value.clone());
        }
        tree
    }
}

impl<V, E> fmt::Debug for Tree<V, E>
where
    V: fmt::Debug,
    E: Engine,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items(Order::Inorder)).finish()
    }
}

impl<V> Tree<V, Iterative> {
    /// Generate a new, empty `Tree` driven by the [`Iterative`] engine.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, E: Engine> Tree<V, E> {
    /// Generate a new, empty `Tree` driven by the given engine.
    ///
    /// The engine drives every operation, including an explicit [`dispose`][Tree::dispose].
    /// Dropping the tree does not use it: the nodes are always freed with an explicit stack, so
    /// even a long chain built with [`Recursive`][crate::recursive::Recursive] drops safely.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc::recursive::Recursive;
    /// use assoc::tree::Tree;
    ///
    /// let mut tree = Tree::with_engine(Recursive);
    /// tree.insert('x', 1);
    ///
    /// assert_eq!(tree.search('x'), Some(&1));
    /// ```
    pub fn with_engine(_engine: E) -> Self {
        Self::default()
    }

    pub(crate) fn from_root(root: Link<V>) -> Self {
        Self {
            root,
            engine: PhantomData,
        }
    }

    /// Puts the tree into the empty state.
    ///
    /// Any nodes still in the tree are dropped first. Calling this on a tree that was already
    /// filled is therefore safe, although the usual pattern is to [`dispose`][Tree::dispose]
    /// explicitly before reusing a tree.
    pub fn init(&mut self) {
        self.dispose();
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    pub fn search(&self, key: char) -> Option<&V> {
        E::search(&self.root, key)
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for
    /// an existing key overwrites (and drops) its value without creating a new node.
    pub fn insert(&mut self, key: char, value: V) {
        E::insert(&mut self.root, key, value);
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// A node with two children takes the key and value of the rightmost node of its left
    /// subtree, and that rightmost node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in ['5', '3', '8', '1', '4'] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert_eq!(tree.delete('5'), Some(()));
    /// assert_eq!(tree.root().map(|root| root.key()), Some('4'));
    /// assert_eq!(tree.delete('5'), None);
    /// ```
    pub fn delete(&mut self, key: char) -> Option<V> {
        E::delete(&mut self.root, key)
    }

    /// Frees every node, leaving the tree in the same state as after [`init`][Tree::init].
    pub fn dispose(&mut self) {
        E::dispose(&mut self.root);
    }

    /// Appends every node to `items` in the given order.
    pub fn traverse<'a>(&'a self, order: Order, items: &mut Items<'a, V>) {
        match order {
            Order::Preorder => self.preorder(items),
            Order::Inorder => self.inorder(items),
            Order::Postorder => self.postorder(items),
        }
    }

    /// Collects every node in the given order into a new vector.
    pub fn items(&self, order: Order) -> Items<'_, V> {
        let mut items = Vec::new();
        self.traverse(order, &mut items);
        items
    }

    /// Appends every node to `items`: node, left subtree, right subtree.
    pub fn preorder<'a>(&'a self, items: &mut Items<'a, V>) {
        E::preorder(&self.root, items);
    }

    /// Appends every node to `items`: left subtree, node, right subtree.
    pub fn inorder<'a>(&'a self, items: &mut Items<'a, V>) {
        E::inorder(&self.root, items);
    }

    /// Appends every node to `items`: left subtree, right subtree, node.
    pub fn postorder<'a>(&'a self, items: &mut Items<'a, V>) {
        E::postorder(&self.root, items);
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.items(Order::Preorder).len()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut to_visit: Vec<_> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = to_visit.pop() {
            deepest = deepest.max(depth);
            to_visit.extend(node.left().map(|n| (n, depth + 1)));
            to_visit.extend(node.right().map(|n| (n, depth + 1)));
        }
        deepest
    }
}

impl<V, E: Engine> IntoIterator for Tree<V, E> {
    type Item = (char, V);
    type IntoIter = IntoIter<V>;

    /// Consumes the tree, yielding its entries in ascending key order.
    fn into_iter(mut self) -> IntoIter<V> {
        let mut iter = IntoIter { stack: Vec::new() };
        iter.push_left_spine(self.root.take());
        iter
    }
}

/// An owning iterator over a [`Tree`] in ascending key order. Each node is freed as it is
/// yielded; the remaining nodes are freed when the iterator is dropped.
pub struct IntoIter<V> {
    stack: Vec<Box<Node<V>>>,
}

impl<V> IntoIter<V> {
    fn push_left_spine(&mut self, mut link: Link<V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (char, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        let Node { key, value, .. } = *node;
        Some((key, value))
    }
}

impl<V> Drop for IntoIter<V> {
    fn drop(&mut self) {
        while let Some(mut node) = self.stack.pop() {
            self.stack.extend(node.left.take());
            self.stack.extend(node.right.take());
        }
    }
}
