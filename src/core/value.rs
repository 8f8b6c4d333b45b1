//! Core value types for front matter handling
//!
//! The header dialect only knows four shapes: plain strings, booleans,
//! flat sequences of strings and one level of nested objects. Mappings keep
//! the order in which keys were first written so the emitted JSON follows
//! the author's layout.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single front matter value
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FrontMatterValue {
    String(String),
    Bool(bool),
    List(Vec<String>),
    Object(FrontMatter),
}

impl FrontMatterValue {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create a list value
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Try to convert to string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to an object
    pub fn as_object(&self) -> Option<&FrontMatter> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Empty strings and empty lists count as blank. Objects and booleans never do.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Bool(_) | Self::Object(_) => false,
        }
    }

    /// Falsy in the loose sense used for optional fields
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Bool(b) => !b,
            Self::Object(map) => map.is_empty(),
            other => other.is_blank(),
        }
    }

    /// Short name of the value's shape
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

impl From<&str> for FrontMatterValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FrontMatterValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<FrontMatter> for FrontMatterValue {
    fn from(map: FrontMatter) -> Self {
        Self::Object(map)
    }
}

/// Insertion-ordered mapping from field name to value
///
/// Re-inserting an existing key replaces its value in place, so keys stay
/// unique and keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, FrontMatterValue)>,
}

impl FrontMatter {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FrontMatterValue>,
    ) -> Option<FrontMatterValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for FrontMatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for FrontMatter
where
    K: Into<String>,
    V: Into<FrontMatterValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
