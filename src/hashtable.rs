//! A hash table with separate chaining, mapping `String` keys to `f32` values. The table has a
//! fixed number of slots chosen at construction and never resizes; every slot holds the head of
//! a singly linked chain of the entries hashed to it.
//!
//! # Examples
//!
//! ```
//! use assoc::hashtable::HashTable;
//!
//! let mut table = HashTable::new();
//!
//! // Nothing in here yet.
//! assert_eq!(table.get("rate"), None);
//!
//! table.insert("rate", 0.5);
//! assert_eq!(table.get("rate"), Some(0.5));
//!
//! // Inserting a new value for the same key overwrites the value.
//! table.insert("rate", 0.25);
//! assert_eq!(table.get("rate"), Some(0.25));
//! assert_eq!(table.len(), 1);
//!
//! // Deleting an entry returns its value.
//! assert_eq!(table.delete("rate"), Some(0.25));
//! assert_eq!(table.get("rate"), None);
//! ```

use std::fmt;

use crate::error::TableError;

/// The number of slots used by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 101;

/// Turns a key into a hash. The table reduces the hash modulo its capacity to pick a slot.
///
/// Any `Fn(&str) -> u64` is a `KeyHasher` too.
pub trait KeyHasher {
    /// Hashes `key`. Equal keys must hash equally.
    fn hash(&self, key: &str) -> u64;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> u64,
{
    fn hash(&self, key: &str) -> u64 {
        self(key)
    }
}

/// One plus the sum of the key's byte values.
///
/// This is cheap but weak: every permutation of the same bytes (`"listen"` and `"silent"`)
/// lands in the same slot, and short keys crowd into a narrow range of sums. Prefer
/// [`Polynomial`] unless slot placement has to match this function.
#[derive(Copy, Clone, Debug, Default)]
pub struct CharSum;

impl KeyHasher for CharSum {
    fn hash(&self, key: &str) -> u64 {
        key.bytes().fold(1, |sum, b| sum.wrapping_add(u64::from(b)))
    }
}

/// A polynomial rolling hash over the key's bytes, mixed with a multiply by 2^64 divided by the
/// golden ratio so that the low bits depend on the whole key. Byte order matters, so anagrams
/// do not collide by construction.
#[derive(Copy, Clone, Debug, Default)]
pub struct Polynomial;

impl Polynomial {
    const BASE: u64 = 31;
    const GOLDEN: u64 = 11400714819323198485;
}

impl KeyHasher for Polynomial {
    fn hash(&self, key: &str) -> u64 {
        let hash = key
            .bytes()
            .fold(0u64, |h, b| h.wrapping_mul(Self::BASE).wrapping_add(u64::from(b)));
        let mixed = hash.wrapping_mul(Self::GOLDEN);
        mixed ^ (mixed >> 32)
    }
}

type Chain = Option<Box<Entry>>;

/// A key, its value, and the rest of the chain it lives in.
pub struct Entry {
    key: String,
    value: f32,
    next: Chain,
}

impl Entry {
    /// The key of this entry.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value of this entry.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Overwrites the value of this entry.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

/// A fixed capacity hash table with chained collision resolution.
pub struct HashTable<H = Polynomial> {
    slots: Vec<Chain>,
    hasher: H,
    len: usize,
}

impl Default for HashTable<Polynomial> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Drop for HashTable<H> {
    fn drop(&mut self) {
        self.delete_all();
    }
}

impl<H> fmt::Debug for HashTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl HashTable<Polynomial> {
    /// Generate a new, empty table with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::empty(DEFAULT_CAPACITY, Polynomial)
    }

    /// Generate a new, empty table with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        Self::with_hasher(capacity, Polynomial)
    }
}

impl<H> HashTable<H> {
    fn empty(capacity: usize, hasher: H) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            hasher,
            len: 0,
        }
    }

    /// Generate a new, empty table with `capacity` slots that places keys using `hasher`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc::hashtable::{CharSum, HashTable};
    ///
    /// let mut table = HashTable::with_hasher(7, CharSum).unwrap();
    /// table.insert("ab", 1.0);
    /// table.insert("ba", 2.0);
    ///
    /// // Anagrams share a slot under `CharSum`.
    /// assert_eq!(table.hash("ab"), table.hash("ba"));
    /// assert_eq!(table.chain_len(table.hash("ab")), 2);
    /// ```
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity { capacity });
        }
        Ok(Self::empty(capacity, hasher))
    }

    /// Empties every slot, returning the table to the state it was constructed in.
    ///
    /// Entries are always owned by their table, so calling this on a filled table drops them
    /// rather than leaking them.
    pub fn init(&mut self) {
        self.delete_all();
    }

    /// Frees every entry in every chain and empties every slot.
    pub fn delete_all(&mut self) {
        for slot in &mut self.slots {
            let mut entry = slot.take();
            while let Some(mut current) = entry {
                entry = current.next.take();
            }
        }
        self.len = 0;
    }

    /// The number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of entries chained in the slot at `index`, or 0 if there is no such slot.
    pub fn chain_len(&self, index: usize) -> usize {
        let mut len = 0;
        let mut entry = self.slots.get(index).and_then(|slot| slot.as_deref());
        while let Some(current) = entry {
            len += 1;
            entry = current.next.as_deref();
        }
        len
    }

    /// Iterates over every key and value, slot by slot and from the head of each chain.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
            entry: None,
        }
    }
}

impl<H: KeyHasher> HashTable<H> {
    /// The slot `key` belongs in, in `0..self.capacity()`.
    pub fn hash(&self, key: &str) -> usize {
        (self.hasher.hash(key) % self.slots.len() as u64) as usize
    }

    /// Finds the entry for `key` by scanning the chain of its slot.
    pub fn search(&self, key: &str) -> Option<&Entry> {
        let mut entry = self.slots[self.hash(key)].as_deref();
        while let Some(current) = entry {
            if current.key == key {
                return Some(current);
            }
            entry = current.next.as_deref();
        }
        None
    }

    /// Finds the entry for `key` so that its value can be updated in place.
    pub fn search_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let index = self.hash(key);
        let mut entry = self.slots[index].as_deref_mut();
        while let Some(current) = entry {
            if current.key == key {
                return Some(current);
            }
            entry = current.next.as_deref_mut();
        }
        None
    }

    /// Stores `value` at `key`. An existing entry is updated in place; otherwise a new entry is
    /// pushed onto the head of the chain, since order within a chain doesn't matter.
    pub fn insert(&mut self, key: &str, value: f32) {
        if let Some(entry) = self.search_mut(key) {
            entry.value = value;
            return;
        }

        let index = self.hash(key);
        let next = self.slots[index].take();
        self.slots[index] = Some(Box::new(Entry {
            key: key.to_owned(),
            value,
            next,
        }));
        self.len += 1;
    }

    /// The value stored at `key`, if any.
    pub fn get(&self, key: &str) -> Option<f32> {
        self.search(key).map(Entry::value)
    }

    /// Removes the entry for `key` and returns its value. The entry's predecessor is linked to its
    /// successor, or the slot is pointed at the successor if the entry was the head of the chain.
    /// Nothing happens when `key` is absent.
    pub fn delete(&mut self, key: &str) -> Option<f32> {
        let index = self.hash(key);
        let mut link = &mut self.slots[index];
        while link.as_ref()?.key != key {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }
}

/// An iterator over the keys and values of a [`HashTable`].
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Chain>,
    entry: Option<&'a Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, f32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry {
                self.entry = entry.next.as_deref();
                return Some((entry.key.as_str(), entry.value));
            }
            self.entry = self.slots.next()?.as_deref();
        }
    }
}
