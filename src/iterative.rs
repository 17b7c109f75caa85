//! The non-recursive [`Engine`]. Descents walk a cursor down the tree and the traversals keep
//! their own stacks of pending nodes, so no operation grows the call stack with the height of the
//! tree. This matters for degenerate trees, which look like a linked list.

use std::cmp::Ordering;

use crate::engine::{self, Engine};
use crate::tree::{Items, Link, Node};

/// Walks the tree with loops and explicit stacks.
#[derive(Copy, Clone, Debug, Default)]
pub struct Iterative;

impl Iterative {
    /// Walks down the left spine of `tree`, emitting each node and stacking its right subtree
    /// for later.
    fn leftmost_preorder<'a, V>(
        mut tree: Option<&'a Node<V>>,
        to_visit: &mut Vec<&'a Node<V>>,
        items: &mut Items<'a, V>,
    ) {
        while let Some(node) = tree {
            items.push((node.key, &node.value));
            to_visit.extend(node.right.as_deref());
            tree = node.left.as_deref();
        }
    }

    /// Walks down the left spine of `tree`, stacking every node on it.
    fn leftmost_inorder<'a, V>(mut tree: Option<&'a Node<V>>, to_visit: &mut Vec<&'a Node<V>>) {
        while let Some(node) = tree {
            to_visit.push(node);
            tree = node.left.as_deref();
        }
    }

    /// Walks down the left spine of `tree`, stacking every node marked as visited for the first
    /// time.
    fn leftmost_postorder<'a, V>(
        mut tree: Option<&'a Node<V>>,
        to_visit: &mut Vec<(&'a Node<V>, bool)>,
    ) {
        while let Some(node) = tree {
            to_visit.push((node, true));
            tree = node.left.as_deref();
        }
    }
}

impl Engine for Iterative {
    fn search<V>(link: &Link<V>, key: char) -> Option<&V> {
        let mut current = link.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    fn insert<V>(mut link: &mut Link<V>, key: char, value: V) {
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => {
                    node.value = value;
                    return;
                }
                Ordering::Greater => link = &mut node.right,
            }
        }
        *link = Some(Node::new_boxed(key, value));
    }

    fn delete<V>(mut link: &mut Link<V>, key: char) -> Option<V> {
        loop {
            let ordering = key.cmp(&link.as_ref()?.key);
            match ordering {
                Ordering::Less => link = &mut link.as_mut()?.left,
                Ordering::Equal => break,
                Ordering::Greater => link = &mut link.as_mut()?.right,
            }
        }
        engine::unlink::<Self, V>(link)
    }

    fn replace_by_rightmost<V>(target: &mut Node<V>) -> Option<V> {
        let mut link = &mut target.left;
        while link.as_ref()?.right.is_some() {
            link = &mut link.as_mut()?.right;
        }

        let mut rightmost = link.take()?;
        *link = rightmost.left.take();
        let Node { key, value, .. } = *rightmost;
        target.key = key;
        Some(std::mem::replace(&mut target.value, value))
    }

    fn dispose<V>(link: &mut Link<V>) {
        let mut to_free: Vec<Box<Node<V>>> = link.take().into_iter().collect();
        while let Some(mut node) = to_free.pop() {
            to_free.extend(node.left.take());
            to_free.extend(node.right.take());
        }
    }

    fn preorder<'a, V>(link: &'a Link<V>, items: &mut Items<'a, V>) {
        let mut to_visit = Vec::new();
        Self::leftmost_preorder(link.as_deref(), &mut to_visit, items);
        while let Some(node) = to_visit.pop() {
            Self::leftmost_preorder(Some(node), &mut to_visit, items);
        }
    }

    fn inorder<'a, V>(link: &'a Link<V>, items: &mut Items<'a, V>) {
        let mut to_visit = Vec::new();
        let mut tree = link.as_deref();
        loop {
            Self::leftmost_inorder(tree, &mut to_visit);
            let Some(node) = to_visit.pop() else {
                break;
            };
            items.push((node.key, &node.value));
            tree = node.right.as_deref();
        }
    }

    fn postorder<'a, V>(link: &'a Link<V>, items: &mut Items<'a, V>) {
        let mut to_visit = Vec::new();
        Self::leftmost_postorder(link.as_deref(), &mut to_visit);
        while let Some((node, first_visit)) = to_visit.pop() {
            if first_visit {
                // Come back to this node once its right subtree is done.
                to_visit.push((node, false));
                Self::leftmost_postorder(node.right.as_deref(), &mut to_visit);
            } else {
                items.push((node.key, &node.value));
            }
        }
    }
}
