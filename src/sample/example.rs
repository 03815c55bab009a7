//! Defines a single categorical example.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;


/// A categorical example.
/// Each example maps an attribute name to its value.
/// The target class is stored under a reserved attribute name
/// (see [`CLASS_KEY`](crate::constants::CLASS_KEY)),
/// and missing values are marked by a reserved sentinel
/// (see [`MISSING_VALUE`](crate::constants::MISSING_VALUE)).
///
/// # Example
/// ```
/// use miniid3::Example;
/// let example = Example::from([("a", 1), ("b", 0), ("Class", 1)]);
/// assert_eq!(example.get("b"), Some("0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Example {
    values: BTreeMap<String, String>,
}


impl Example {
    /// Construct an example without attributes.
    #[inline]
    pub fn new() -> Self {
        Self { values: BTreeMap::new() }
    }


    /// Returns the value of `attribute` if exists.
    #[inline]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }


    /// Set the value of `attribute`.
    /// Returns the previous value if exists.
    #[inline]
    pub fn insert<K, V>(&mut self, attribute: K, value: V) -> Option<String>
        where K: Into<String>,
              V: ToString,
    {
        self.values.insert(attribute.into(), value.to_string())
    }


    /// Returns `true` if this example has a value for `attribute`.
    #[inline]
    pub fn contains(&self, attribute: &str) -> bool {
        self.values.contains_key(attribute)
    }


    /// Returns the attribute names in lexicographic order.
    #[inline]
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }


    /// Returns the pairs of attribute name and value.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }


    /// Returns the number of attributes, including the class attribute.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if this example has no attribute.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    #[inline]
    pub(crate) fn values_mut(
        &mut self
    ) -> impl Iterator<Item = (&String, &mut String)>
    {
        self.values.iter_mut()
    }
}


impl AsRef<Example> for Example {
    #[inline]
    fn as_ref(&self) -> &Example {
        self
    }
}


impl<K, V, const N: usize> From<[(K, V); N]> for Example
    where K: Into<String>,
          V: ToString,
{
    #[inline]
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}


impl<K, V> FromIterator<(K, V)> for Example
    where K: Into<String>,
          V: ToString,
{
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = (K, V)>
    {
        let values = iter.into_iter()
            .map(|(k, v)| (k.into(), v.to_string()))
            .collect();
        Self { values }
    }
}


impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{line}}}")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let ex = Example::from([("a", 1), ("b", 0), ("Class", 1)]);
        assert_eq!(ex.len(), 3);
        assert_eq!(ex.get("a"), Some("1"));
        assert_eq!(ex.get("Class"), Some("1"));
        assert_eq!(ex.get("c"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut ex = Example::from([("a", "y")]);
        let prev = ex.insert("a", "n");
        assert_eq!(prev.as_deref(), Some("y"));
        assert_eq!(ex.get("a"), Some("n"));
    }

    #[test]
    fn test_display() {
        let ex = Example::from([("b", 0), ("a", 1)]);
        assert_eq!(format!("{ex}"), "{a: 1, b: 0}");
    }
}
