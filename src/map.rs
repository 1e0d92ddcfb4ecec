//! Ordered map type for NDF blocks.
//!
//! [`NdfMap`] wraps an [`IndexMap`] so keys keep the order they were parsed or
//! inserted in. Order drives rendering (one line per key, in iteration order)
//! but not equality: two maps holding the same entries compare equal whatever
//! their order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ndf::{NdfMap, Value};
//!
//! let mut map = NdfMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered map of string keys to NDF values.
///
/// # Examples
///
/// ```rust
/// use serde_ndf::{NdfMap, Value};
///
/// let mut map = NdfMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NdfMap(IndexMap<String, crate::Value>);

impl NdfMap {
    /// Creates an empty `NdfMap`.
    #[must_use]
    pub fn new() -> Self {
        NdfMap(IndexMap::new())
    }

    /// Creates an empty `NdfMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NdfMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// A repeated key keeps its original position and takes the new value;
    /// the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ndf::{NdfMap, Value};
    ///
    /// let mut map = NdfMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(43));
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl Default for NdfMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, crate::Value>> for NdfMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        NdfMap(map.into_iter().collect())
    }
}

impl From<NdfMap> for HashMap<String, crate::Value> {
    fn from(map: NdfMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for NdfMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NdfMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for NdfMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        NdfMap(IndexMap::from_iter(iter))
    }
}

impl<'de> Deserialize<'de> for NdfMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match crate::Value::deserialize(deserializer)? {
            crate::Value::Map(map) => Ok(map),
            crate::Value::Null => Ok(NdfMap::new()),
            other => Err(serde::de::Error::custom(format!(
                "expected map, found {}",
                other.type_name()
            ))),
        }
    }
}

impl Serialize for NdfMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            state.serialize_entry(k, v)?;
        }
        state.end()
    }
}
