//! Errors returned by this crate. Lookups that miss are not errors; they return `None`.

use thiserror::Error;

/// Errors raised while constructing a [`HashTable`][crate::hashtable::HashTable].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one slot to hash keys into.
    #[error("hash table capacity must be at least one slot, got {capacity}")]
    ZeroCapacity {
        /// The capacity that was requested.
        capacity: usize,
    },
}
