//! Replaces missing values before training.
use std::collections::{BTreeSet, HashMap};

use crate::constants::MISSING_VALUE;
use super::example::Example;


/// Fills the missing values of a collection of examples.
///
/// Each missing value under an attribute `k` is replaced by
/// the first non-missing value of `k`
/// found by scanning the collection in its given order.
/// This is not the most frequent value,
/// so the result depends on the order of the examples.
/// If no example has a non-missing value for `k`,
/// the sentinel stays and is treated as an ordinary value afterwards.
///
/// An attribute that some examples have but others lack
/// is first filled with the sentinel in the latter
/// (see [`Imputer::complete`]), so it is imputed the same way.
#[derive(Debug, Clone)]
pub struct Imputer {
    missing_value: String,
}


impl Imputer {
    /// Construct a new instance of [`Imputer`]
    /// that replaces [`MISSING_VALUE`].
    #[inline]
    pub fn new() -> Self {
        Self { missing_value: MISSING_VALUE.to_string() }
    }


    /// Set the sentinel that marks a missing value.
    /// Default is `?`.
    #[inline]
    pub fn missing_value<S: AsRef<str>>(mut self, sentinel: S) -> Self {
        self.missing_value = sentinel.as_ref().to_string();
        self
    }


    /// Returns `true` if `value` is the missing-value sentinel.
    #[inline]
    pub fn is_missing(&self, value: &str) -> bool {
        value == self.missing_value
    }


    /// Insert the sentinel for every attribute
    /// that appears in some example of `examples`
    /// but is absent from the example at hand.
    /// Returns the number of inserted values.
    pub fn complete(&self, examples: &mut [Example]) -> usize {
        let attributes = examples.iter()
            .flat_map(|example| example.attributes())
            .map(str::to_string)
            .collect::<BTreeSet<_>>();

        let mut n_inserted = 0;
        for example in examples.iter_mut() {
            for attribute in attributes.iter() {
                if example.contains(attribute) { continue; }
                example.insert(attribute.as_str(), &self.missing_value);
                n_inserted += 1;
            }
        }
        n_inserted
    }


    /// Replace the missing values of `examples` in place.
    /// Absent attributes are completed first.
    /// Returns the number of replaced values.
    pub fn impute(&self, examples: &mut [Example]) -> usize {
        self.complete(examples);

        let mut replacement: HashMap<&str, String> = HashMap::new();
        for example in examples.iter() {
            for (attribute, value) in example.iter() {
                if self.is_missing(value) { continue; }
                replacement.entry(attribute)
                    .or_insert_with(|| value.to_string());
            }
        }
        let replacement = replacement.into_iter()
            .map(|(attribute, value)| (attribute.to_string(), value))
            .collect::<HashMap<_, _>>();

        let mut n_replaced = 0;
        for example in examples.iter_mut() {
            for (attribute, value) in example.values_mut() {
                if !self.is_missing(value) { continue; }
                if let Some(found) = replacement.get(attribute) {
                    value.clone_from(found);
                    n_replaced += 1;
                }
            }
        }
        n_replaced
    }
}


impl Default for Imputer {
    fn default() -> Self {
        Self::new()
    }
}
