use rayon::prelude::*;

use crate::{checkers, Example, Imputer};
use super::{
    builder::AttributeOrder,
    entropy::*,
    node::Node,
    id3_classifier::Id3Classifier,
};

use std::fmt;
use std::collections::BTreeSet;


/// The ID3 algorithm.
/// Given a set of categorical training examples,
/// [`Id3`] grows a decision tree greedily from the root,
/// splitting each node on the attribute
/// that maximizes the information gain.
/// A node becomes a leaf when its examples share one class,
/// or when no attribute separates them.
///
/// The tree is not limited in depth;
/// use [`Pruner`](crate::Pruner) to simplify it afterwards.
///
/// [`Id3`] is constructed by [`Id3Builder`](crate::Id3Builder).
///
/// # Example
/// ```
/// use miniid3::prelude::*;
///
/// let mut train = vec![
///     Example::from([("a", 1), ("b", 0), ("Class", 1)]),
///     Example::from([("a", 1), ("b", 1), ("Class", 1)]),
///     Example::from([("a", 0), ("b", 0), ("Class", 0)]),
/// ];
/// let id3 = Id3Builder::new()
///     .default_label(0)
///     .build();
/// let tree = id3.fit(&mut train);
///
/// let example = Example::from([("a", 0), ("b", 1)]);
/// assert_eq!(tree.classify(&example), Some("0"));
/// assert_eq!(tree.score(&train), 1.0);
/// ```
pub struct Id3 {
    class_key: String,
    missing_value: String,
    default_label: String,
    order: AttributeOrder,
    impute: bool,
}


impl Id3 {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn new(
        class_key: String,
        missing_value: String,
        default_label: String,
        order: AttributeOrder,
        impute: bool,
    ) -> Self
    {
        Self { class_key, missing_value, default_label, order, impute, }
    }


    /// Returns the name of this algorithm.
    pub fn name(&self) -> &str {
        "ID3 Decision Tree"
    }


    /// Returns the parameters of this algorithm.
    pub fn info(&self) -> Vec<(&str, String)> {
        Vec::from([
            ("Class attribute", self.class_key.clone()),
            ("Missing value", self.missing_value.clone()),
            ("Default label", self.default_label.clone()),
            ("Attribute order", format!("{}", self.order)),
            ("Imputation", format!("{}", self.impute)),
        ])
    }


    /// Grow a decision tree on `examples`.
    ///
    /// An attribute absent from some examples is inserted into them
    /// as the missing-value sentinel.
    /// If the imputation is enabled (default),
    /// the missing values of `examples` are then replaced in place
    /// before training (see [`Imputer`]).
    ///
    /// # Panics
    /// Panics if an example has no class attribute.
    pub fn fit(&self, examples: &mut [Example]) -> Id3Classifier {
        checkers::class_attribute(examples, &self.class_key);

        // Absent attributes take the sentinel
        // so that they are imputed or split on like any missing value.
        let imputer = Imputer::new().missing_value(&self.missing_value);
        if self.impute {
            imputer.impute(examples);
        } else {
            imputer.complete(examples);
        }

        let examples = examples.iter().collect::<Vec<_>>();
        let root = self.grow(&examples[..], None);

        Id3Classifier::new(root, &self.class_key, &self.missing_value)
    }


    /// Construct the sub-tree for `examples`.
    /// `branch` is the attribute value of the parent's split
    /// that produced `examples`; `None` at the root.
    fn grow(&self, examples: &[&Example], branch: Option<&str>) -> Node {
        let tag = branch.unwrap_or(&self.default_label).to_string();

        // Only an empty set of examples has no majority class.
        // Since every partition below is non-empty,
        // this happens only at the root.
        let Some(majority) = majority_class(examples, &self.class_key) else {
            let answer = Some(self.default_label.clone());
            return Node::leaf(Some(tag), answer, None);
        };
        let majority = majority.to_string();

        let attributes = self.attributes(examples);

        // A split is trivial if every attribute takes one value.
        let trivial = attributes.iter()
            .all(|attribute| distinct_values(examples, attribute).len() == 1);

        if trivial || entropy(examples, &self.class_key) == 0f64 {
            let majority = Some(majority);
            return Node::leaf(Some(tag), majority.clone(), majority);
        }

        let Some(attribute) = self.select(examples, &attributes) else {
            let majority = Some(majority);
            return Node::leaf(Some(tag), majority.clone(), majority);
        };

        let children = partition(examples, attribute)
            .into_iter()
            .map(|(value, subset)| {
                let child = self.grow(&subset[..], Some(value));
                (value.to_string(), Box::new(child))
            })
            .collect();

        Node::branch(attribute, children, majority)
    }


    /// Returns the candidate attributes of `examples`
    /// arranged by `self.order`.
    fn attributes<'a>(&self, examples: &[&'a Example]) -> Vec<&'a str> {
        let names = examples.iter()
            .flat_map(|&example| example.attributes())
            .filter(|&name| name != self.class_key)
            .collect::<BTreeSet<_>>();
        self.order.arrange(names)
    }


    /// Select the attribute to split on.
    ///
    /// An attribute replaces the current best
    /// only if its gain is strictly greater,
    /// starting from zero.
    /// If no attribute has a positive gain,
    /// the first attribute taking two or more values is chosen,
    /// and then the first attribute.
    fn select<'a>(&self, examples: &[&Example], attributes: &[&'a str])
        -> Option<&'a str>
    {
        let gains = attributes.par_iter()
            .map(|attribute| gain(examples, attribute, &self.class_key))
            .collect::<Vec<f64>>();

        let mut best = None;
        let mut max_gain = 0f64;
        for (&attribute, g) in attributes.iter().zip(gains) {
            if g > max_gain {
                max_gain = g;
                best = Some(attribute);
            }
        }

        best.or_else(|| {
            attributes.iter()
                .find(|attribute| {
                    distinct_values(examples, attribute).len() != 1
                })
                .copied()
        })
        .or_else(|| attributes.first().copied())
    }
}


impl fmt::Display for Id3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------\n# {}\n", self.name())?;
        for (key, value) in self.info() {
            writeln!(f, "- {key}: {value}")?;
        }
        write!(f, "----------")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Id3Builder;

    #[test]
    fn test_empty_examples() {
        let id3 = Id3Builder::new().default_label("democrat").build();
        let tree = id3.fit(&mut []);
        let root = tree.root();
        assert!(root.is_leaf());
        assert_eq!(root.fallback(), Some("democrat"));
        assert_eq!(root.split_attribute(), Some("democrat"));
        assert_eq!(root.majority(), None);
    }

    #[test]
    fn test_trivial_split() {
        let mut examples = vec![
            Example::from([("a", 1), ("Class", 0)]),
            Example::from([("a", 1), ("Class", 1)]),
            Example::from([("a", 1), ("Class", 1)]),
        ];
        let tree = Id3Builder::new().build().fit(&mut examples);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().fallback(), Some("1"));
        assert_eq!(tree.root().majority(), Some("1"));
    }

    #[test]
    fn test_children_are_observed_values() {
        let mut examples = vec![
            Example::from([("color", "red"), ("Class", "p")]),
            Example::from([("color", "blue"), ("Class", "q")]),
            Example::from([("color", "red"), ("Class", "p")]),
        ];
        let tree = Id3Builder::new().build().fit(&mut examples);
        let values = tree.root()
            .children()
            .map(|(value, _)| value)
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["blue", "red"]);
        assert_eq!(tree.root().split_attribute(), Some("color"));

        // The leaves are tagged with the branch value.
        let tags = tree.root()
            .children()
            .map(|(_, child)| child.split_attribute())
            .collect::<Vec<_>>();
        assert_eq!(tags, vec![Some("blue"), Some("red")]);
    }

    #[test]
    fn test_zero_gain_fallback() {
        // XOR: no attribute has a positive gain at the root,
        // so the first non-homogeneous attribute is chosen.
        let mut examples = vec![
            Example::from([("a", 0), ("b", 0), ("z", 0), ("Class", 0)]),
            Example::from([("a", 0), ("b", 1), ("z", 0), ("Class", 1)]),
            Example::from([("a", 1), ("b", 0), ("z", 0), ("Class", 1)]),
            Example::from([("a", 1), ("b", 1), ("z", 0), ("Class", 0)]),
        ];
        let order = AttributeOrder::Given(vec!["z".into(), "b".into()]);
        let tree = Id3Builder::new()
            .attribute_order(order)
            .build()
            .fit(&mut examples);
        assert_eq!(tree.root().split_attribute(), Some("b"));
        assert_eq!(tree.score(&examples), 1.0);
    }

    #[test]
    fn test_tie_break_follows_order() {
        let mut examples = vec![
            Example::from([("a", 1), ("b", 0), ("Class", 1)]),
            Example::from([("a", 1), ("b", 1), ("Class", 1)]),
            Example::from([("a", 0), ("b", 0), ("Class", 0)]),
            Example::from([("a", 0), ("b", 1), ("Class", 1)]),
        ];
        let tree = Id3Builder::new().build().fit(&mut examples);
        assert_eq!(tree.root().split_attribute(), Some("a"));

        let order = AttributeOrder::Given(vec!["b".into()]);
        let tree = Id3Builder::new()
            .attribute_order(order)
            .build()
            .fit(&mut examples);
        assert_eq!(tree.root().split_attribute(), Some("b"));
    }

    #[test]
    fn test_tie_break_on_relabeled_partition() {
        // `a` and `b` induce the same partition
        // since `b` is `a` with the values `y` and `z` swapped.
        let rows = [
            ("x", "p"), ("x", "q"),
            ("y", "p"), ("y", "q"), ("y", "q"), ("y", "q"),
            ("z", "p"), ("z", "q"), ("z", "q"), ("z", "q"), ("z", "q"),
        ];
        let mut examples = rows.into_iter()
            .map(|(a, class)| {
                let b = match a { "y" => "z", "z" => "y", _ => a };
                Example::from([("a", a), ("b", b), ("Class", class)])
            })
            .collect::<Vec<_>>();
        let tree = Id3Builder::new().build().fit(&mut examples);
        assert_eq!(tree.root().split_attribute(), Some("a"));
    }

    #[test]
    fn test_absent_attribute_is_imputed() {
        let mut examples = vec![
            Example::from([("a", "NA"), ("C", "x")]),
            Example::from([("C", "y")]),
            Example::from([("a", "p"), ("C", "x")]),
            Example::from([("a", "q"), ("C", "y")]),
        ];
        let tree = Id3Builder::new()
            .class_key("C")
            .missing_value("NA")
            .build()
            .fit(&mut examples);
        assert_eq!(examples[1].get("a"), Some("p"));

        let values = tree.root()
            .children()
            .map(|(value, _)| value)
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["p", "q"]);
    }

    #[test]
    fn test_absent_attribute_without_imputation() {
        let mut examples = vec![
            Example::from([("a", "NA"), ("C", "x")]),
            Example::from([("C", "y")]),
            Example::from([("a", "p"), ("C", "x")]),
            Example::from([("a", "q"), ("C", "y")]),
        ];
        let tree = Id3Builder::new()
            .class_key("C")
            .missing_value("NA")
            .impute(false)
            .build()
            .fit(&mut examples);

        // The absent value and the sentinel share one branch.
        let values = tree.root()
            .children()
            .map(|(value, _)| value)
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["NA", "p", "q"]);
        assert_eq!(tree.missing_value(), "NA");

        let absent = Example::new();
        let explicit = Example::from([("a", "NA")]);
        assert_eq!(tree.classify(&absent), Some("x"));
        assert_eq!(tree.classify(&explicit), Some("x"));
    }

    #[test]
    fn test_imputation_before_training() {
        let mut examples = vec![
            Example::from([("a", "?"), ("Class", "x")]),
            Example::from([("a", "n"), ("Class", "y")]),
            Example::from([("a", "y"), ("Class", "x")]),
        ];
        let tree = Id3Builder::new().build().fit(&mut examples);
        assert_eq!(examples[0].get("a"), Some("n"));
        assert!(!tree.root().children().any(|(value, _)| value == "?"));
    }

    #[test]
    #[should_panic]
    fn test_missing_class_attribute() {
        let mut examples = vec![Example::from([("a", 1)])];
        Id3Builder::new().build().fit(&mut examples);
    }
}
