use assoc::balance::{balance, balanced, is_balanced};
use assoc::recursive::Recursive;
use assoc::tree::{Order, Tree};

use std::collections::{HashMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::{Key, Op};

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<V>(ops: &[Op<V>], tree: &mut Tree<V>, map: &mut HashMap<char, V>)
where
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(Key(k), v) => {
                tree.insert(*k, v.clone());
                map.insert(*k, v.clone());
            }
            Op::Delete(Key(k)) => {
                assert_eq!(tree.delete(*k), map.remove(k));
            }
            Op::Traverse => {
                assert_eq!(tree.items(Order::Inorder).len(), map.len());
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    map.keys().all(|key| tree.search(*key) == map.get(key)) && tree.len() == map.len()
}

#[quickcheck]
fn contains(xs: Vec<Key>) -> bool {
    let mut tree = Tree::new();
    for Key(x) in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|Key(x)| tree.search(*x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<Key>, nots: Vec<Key>) -> bool {
    let mut tree = Tree::with_engine(Recursive);
    for Key(x) in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|Key(x)| tree.search(*x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<Key>, deletes: Vec<Key>) -> bool {
    let mut tree = Tree::new();
    for Key(x) in &xs {
        tree.insert(*x, *x);
    }
    for Key(delete) in &deletes {
        tree.delete(*delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|Key(x)| tree.search(*x).is_none())
        && still_present.iter().all(|Key(x)| tree.search(*x) == Some(x))
}

#[quickcheck]
fn dispose_then_init_is_fresh(xs: Vec<Key>, probes: Vec<Key>) -> bool {
    let mut tree = Tree::new();
    for Key(x) in &xs {
        tree.insert(*x, 1u8);
    }
    tree.dispose();
    tree.init();

    tree.is_empty() && probes.iter().all(|Key(p)| tree.search(*p).is_none())
}

#[quickcheck]
fn balance_keeps_pairs(xs: Vec<(char, u16)>) -> bool {
    let mut tree = Tree::new();
    for (k, v) in &xs {
        tree.insert(*k, *v);
    }
    let before: Vec<(char, u16)> =
        tree.items(Order::Inorder).into_iter().map(|(k, v)| (k, *v)).collect();

    let copy = balanced(&tree);
    balance(&mut tree);

    let after: Vec<(char, u16)> =
        tree.items(Order::Inorder).into_iter().map(|(k, v)| (k, *v)).collect();
    is_balanced(&tree)
        && is_balanced(&copy)
        && before == after
        && copy.items(Order::Preorder) == tree.items(Order::Preorder)
}
