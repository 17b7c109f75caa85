use quickcheck::{Arbitrary, Gen};

mod hashtable;
mod tree;

/// Keys are drawn from a small alphabet so that random operations hit existing entries often.
const ALPHABET: &[char] = &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'm', 'n', 'x', 'y', 'z'];

/// A key for quicktests, usable as a tree key or, via `as_str`, a table key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub char);

impl Key {
    /// A one- or two-character string so that chains hold keys of different lengths.
    pub fn as_string(self) -> String {
        match self.0 {
            c @ ('a'..='g') => c.to_string(),
            c => format!("{}{}", c, c.to_ascii_uppercase()),
        }
    }
}

impl Arbitrary for Key {
    fn arbitrary(g: &mut Gen) -> Self {
        Key(*g.choose(ALPHABET).unwrap())
    }
}

/// An enum for the various kinds of "things" to do to
/// the containers in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<V> {
    /// Insert the key and value into the data structure
    Insert(Key, V),
    /// Delete the key from the data structure
    Delete(Key),
    /// Compare traversals or iterators
    Traverse,
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(Key::arbitrary(g), V::arbitrary(g)),
            1 => Op::Delete(Key::arbitrary(g)),
            2 => Op::Traverse,
            _ => unreachable!(),
        }
    }
}
