//! Order-preserving symbol table
//!
//! Tables in reposcope are small (tens of entries) and their iteration order is
//! observable: key legends list bindings in the order they were added. A linear
//! scan over a `Vec` keeps both properties without hashing.

use thiserror::Error;

/// Errors raised while growing a table
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Out of memory")]
    OutOfMemory,
}

/// A growable mapping that remembers insertion order.
///
/// Keys are unique: inserting an existing key overwrites its value in place and
/// does not grow the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for SymbolTable<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> SymbolTable<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the value stored for `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Make room for `additional` more entries so the following inserts
    /// cannot fail
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), SymbolError> {
        self.entries
            .try_reserve(additional)
            .map_err(|_| SymbolError::OutOfMemory)
    }

    /// Update the value for `key` if present, otherwise append a new entry.
    ///
    /// Returns the previous value when an entry was overwritten. Growth is
    /// attempted with `try_reserve`, so an allocation failure leaves the table
    /// untouched and is reported as [`SymbolError::OutOfMemory`].
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, SymbolError> {
        if let Some(slot) = self.get_mut(&key) {
            return Ok(Some(std::mem::replace(slot, value)));
        }

        self.entries
            .try_reserve(1)
            .map_err(|_| SymbolError::OutOfMemory)?;
        self.entries.push((key, value));
        Ok(None)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Keys whose value equals `value`, in insertion order
    pub fn keys_for<'a>(&'a self, value: &'a V) -> impl Iterator<Item = &'a K> + 'a
    where
        V: PartialEq,
    {
        self.entries
            .iter()
            .filter(move |(_, v)| v == value)
            .map(|(k, _)| k)
    }
}
