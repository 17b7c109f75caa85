//! Character frequency counting on top of a [`Tree`]. Only [`Tree::init`], [`Tree::search`] and
//! [`Tree::insert`] are used, so any engine works.
//!
//! # Examples
//!
//! ```
//! use assoc::letters::letter_count;
//! use assoc::tree::Tree;
//!
//! let mut tree = Tree::new();
//! letter_count(&mut tree, "abBccc_ 123 *");
//!
//! assert_eq!(tree.search('a'), Some(&1));
//! assert_eq!(tree.search('b'), Some(&2));
//! assert_eq!(tree.search('c'), Some(&3));
//! assert_eq!(tree.search(' '), Some(&2));
//! assert_eq!(tree.search('_'), Some(&5));
//! ```

use crate::engine::Engine;
use crate::tree::Tree;

/// The key every character other than a letter or a space is counted under.
pub const OTHER: char = '_';

/// Folds `c` into one of the counted buckets: a lowercase ASCII letter, a space, or [`OTHER`].
pub fn normalize(c: char) -> char {
    match c.to_ascii_lowercase() {
        lower @ ('a'..='z' | ' ') => lower,
        _ => OTHER,
    }
}

/// Resets `tree` and counts how often each bucket of [`normalize`] occurs in `input`. Letters
/// are counted case-insensitively.
pub fn letter_count<E: Engine>(tree: &mut Tree<u32, E>, input: &str) {
    tree.init();
    for key in input.chars().map(normalize) {
        let count = tree.search(key).copied().unwrap_or(0);
        tree.insert(key, count + 1);
    }
}
