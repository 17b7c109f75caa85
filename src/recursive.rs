//! The recursive [`Engine`]. Each operation handles the current node and recurses into the
//! child link it applies to, so call depth grows with the height of the tree.

use std::cmp::Ordering;

use crate::engine::{self, Engine};
use crate::tree::{Items, Link, Node};

/// Walks the tree with plain recursion.
#[derive(Copy, Clone, Debug, Default)]
pub struct Recursive;

impl Recursive {
    /// Unlinks the rightmost node of the subtree, lifting its left child into its place.
    fn take_rightmost<V>(link: &mut Link<V>) -> Option<Box<Node<V>>> {
        if link.as_ref()?.right.is_some() {
            return Self::take_rightmost(&mut link.as_mut()?.right);
        }

        let mut rightmost = link.take()?;
        *link = rightmost.left.take();
        Some(rightmost)
    }
}

impl Engine for Recursive {
    fn search<V>(link: &Link<V>, key: char) -> Option<&V> {
        let node = link.as_ref()?;
        match key.cmp(&node.key) {
            Ordering::Less => Self::search(&node.left, key),
            Ordering::Equal => Some(&node.value),
            Ordering::Greater => Self::search(&node.right, key),
        }
    }

    fn insert<V>(link: &mut Link<V>, key: char, value: V) {
        match link {
            None => *link = Some(Node::new_boxed(key, value)),
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert(&mut node.left, key, value),
                Ordering::Equal => node.value = value,
                Ordering::Greater => Self::insert(&mut node.right, key, value),
            },
        }
    }

    fn delete<V>(link: &mut Link<V>, key: char) -> Option<V> {
        let node = link.as_mut()?;
        match key.cmp(&node.key) {
            Ordering::Less => Self::delete(&mut node.left, key),
            Ordering::Equal => engine::unlink::<Self, V>(link),
            Ordering::Greater => Self::delete(&mut node.right, key),
        }
    }

    fn replace_by_rightmost<V>(target: &mut Node<V>) -> Option<V> {
        let rightmost = Self::take_rightmost(&mut target.left)?;
        let Node { key, value, .. } = *rightmost;
        target.key = key;
        Some(std::mem::replace(&mut target.value, value))
    }

    fn dispose<V>(link: &mut Link<V>) {
        if let Some(node) = link {
            Self::dispose(&mut node.left);
            Self::dispose(&mut node.right);
        }
        *link = None;
    }

    fn preorder<'a, V>(link: &'a Link<V>, items: &mut Items<'a, V>) {
        if let Some(node) = link {
            items.push((node.key, &node.value));
            Self::preorder(&node.left, items);
            Self::preorder(&node.right, items);
        }
    }

    fn inorder<'a, V>(link: &'a Link<V>, items: &mut Items<'a, V>) {
        if let Some(node) = link {
            Self::inorder(&node.left, items);
            items.push((node.key, &node.value));
            Self::inorder(&node.right, items);
        }
    }

    fn postorder<'a, V>(link: &'a Link<V>, items: &mut Items<'a, V>) {
        if let Some(node) = link {
            Self::postorder(&node.left, items);
            Self::postorder(&node.right, items);
            items.push((node.key, &node.value));
        }
    }
}
