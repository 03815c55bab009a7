use crate::constants::{CLASS_KEY, MISSING_VALUE};
use super::id3::Id3;

use std::fmt;
use std::collections::BTreeSet;


/// The enumeration order of the candidate attributes.
/// When two attributes have the same information gain,
/// the one that comes first in this order is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeOrder {
    /// Lexicographic order of the attribute names.
    #[default]
    Lexicographic,
    /// The given order.
    /// Attributes not in the list follow in lexicographic order.
    Given(Vec<String>),
}


impl AttributeOrder {
    /// Arrange `names` in this order.
    pub(super) fn arrange<'a>(&self, names: BTreeSet<&'a str>) -> Vec<&'a str> {
        match self {
            Self::Lexicographic => names.into_iter().collect(),
            Self::Given(order) => {
                let mut rest = names;
                let mut arranged = order.iter()
                    .filter_map(|name| rest.take(name.as_str()))
                    .collect::<Vec<_>>();
                arranged.extend(rest);
                arranged
            },
        }
    }
}


impl fmt::Display for AttributeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexicographic => write!(f, "Lexicographic"),
            Self::Given(order) => write!(f, "Given ({} names)", order.len()),
        }
    }
}


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for constructing [`Id3`].
///
/// # Example
///
/// ```
/// use miniid3::prelude::*;
///
/// let id3 = Id3Builder::new()
///     .default_label("democrat")
///     .attribute_order(AttributeOrder::Lexicographic)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct Id3Builder {
    class_key: String,
    missing_value: String,
    default_label: String,
    order: AttributeOrder,
    impute: bool,
}


impl Id3Builder {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, [`Id3Builder`] sets the parameters as follows;
    /// ```text
    /// class_key: CLASS_KEY == "Class",
    /// missing_value: MISSING_VALUE == "?",
    /// default_label: "0",
    /// attribute_order: AttributeOrder::Lexicographic,
    /// impute: true,
    /// ```
    pub fn new() -> Self {
        Self {
            class_key: CLASS_KEY.to_string(),
            missing_value: MISSING_VALUE.to_string(),
            default_label: "0".to_string(),
            order: AttributeOrder::default(),
            impute: true,
        }
    }


    /// Set the name of the class attribute.
    /// Default is `"Class"`.
    #[inline]
    pub fn class_key<S: AsRef<str>>(mut self, class_key: S) -> Self {
        self.class_key = class_key.as_ref().to_string();
        self
    }


    /// Set the sentinel that marks a missing value.
    /// Default is `"?"`.
    #[inline]
    pub fn missing_value<S: AsRef<str>>(mut self, sentinel: S) -> Self {
        self.missing_value = sentinel.as_ref().to_string();
        self
    }


    /// Set the label predicted by the tree
    /// trained on an empty set of examples.
    /// Default is `"0"`.
    #[inline]
    pub fn default_label<S: ToString>(mut self, label: S) -> Self {
        self.default_label = label.to_string();
        self
    }


    /// Set the enumeration order of the candidate attributes.
    /// Default is `AttributeOrder::Lexicographic`.
    #[inline]
    pub fn attribute_order(mut self, order: AttributeOrder) -> Self {
        self.order = order;
        self
    }


    /// Set whether the missing values are imputed before training.
    /// Default is `true`.
    #[inline]
    pub fn impute(mut self, flag: bool) -> Self {
        self.impute = flag;
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    pub fn build(self) -> Id3 {
        Id3::new(
            self.class_key,
            self.missing_value,
            self.default_label,
            self.order,
            self.impute,
        )
    }
}


impl Default for Id3Builder {
    fn default() -> Self {
        Self::new()
    }
}
