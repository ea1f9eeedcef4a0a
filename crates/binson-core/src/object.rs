//! Binson object: a map from string keys to values.
//!
//! Keys are kept in a `BTreeMap<String, _>`. Rust's `String` ordering is the
//! lexicographic order of the UTF-8 bytes, which is exactly the canonical
//! Binson key order, so iteration order *is* wire order and the encoder never
//! has to sort.

use std::collections::{btree_map, BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::ops::Index;

use crate::value::Value;

/// A Binson object. Insertion order is not significant; a repeated key
/// overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Object {
    entries: BTreeMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Consuming form of [`insert`](Self::insert) for fluent construction.
    ///
    /// ```
    /// use binson_core::Object;
    /// let obj = Object::new().with("i", 1).with("co", "u");
    /// assert_eq!(obj.len(), 2);
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical (ascending byte) key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, String, Value> {
        self.entries.values()
    }

    /// Copy every entry of `other` into `self`; `other` wins on shared keys.
    pub fn merge(&mut self, other: Object) {
        self.entries.extend(other.entries);
    }

    /// Canonical encoding of this object.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        crate::encoder::encode_object(self, &mut out);
        out
    }

    /// Strictly decode bytes whose top-level value must be an object.
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Object> {
        crate::decoder::decode_object(bytes)
    }
}

impl Index<&str> for Object {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &Value {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("no entry found for key {key:?}"),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = Object::new();
        obj.extend(iter);
        obj
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<BTreeMap<String, Value>> for Object {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Object { entries }
    }
}

impl<S: BuildHasher> From<HashMap<String, Value, S>> for Object {
    fn from(map: HashMap<String, Value, S>) -> Self {
        Object {
            entries: map.into_iter().collect(),
        }
    }
}
