//! Defines the decision tree classifier produced by `Id3`.
use crate::{checkers, Classifier, Example};
use super::node::Node;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// ID3 decision tree classifier.
/// This struct is a wrapper of the root [`Node`]
/// that also remembers the name of the class attribute
/// and the missing-value sentinel used in training.
#[derive(Debug, Clone, PartialEq)]
pub struct Id3Classifier {
    root: Node,
    class_key: String,
    missing_value: String,
}


impl Id3Classifier {
    #[inline]
    pub(crate) fn new(root: Node, class_key: &str, missing_value: &str)
        -> Self
    {
        Self {
            root,
            class_key: class_key.to_string(),
            missing_value: missing_value.to_string(),
        }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    #[inline]
    pub(crate) fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }


    /// Returns the name of the class attribute.
    #[inline]
    pub fn class_key(&self) -> &str {
        &self.class_key
    }


    /// Returns the missing-value sentinel.
    /// An attribute absent from an example is read as this value.
    #[inline]
    pub fn missing_value(&self) -> &str {
        &self.missing_value
    }


    /// Returns the class label that this tree assigns to `example`.
    /// Returns `None` if the traversal ends at a leaf without a label.
    #[inline]
    pub fn classify(&self, example: &Example) -> Option<&str> {
        self.root.predict(example, &self.missing_value)
    }


    /// Returns the fraction of `examples` classified correctly.
    ///
    /// # Panics
    /// Panics if `examples` is empty.
    #[inline]
    pub fn score(&self, examples: &[Example]) -> f64 {
        self.accuracy(examples, &self.class_key)
    }


    /// Returns the accuracy over `examples`
    /// as if the node at `path` were collapsed to its majority class.
    pub(crate) fn score_collapsed(&self, examples: &[Example], path: &[String])
        -> f64
    {
        checkers::evaluation_set(examples);
        let n_correct = examples.iter()
            .filter(|example| {
                let truth = example.get(&self.class_key);
                let prediction = self.root
                    .predict_collapsed(example, &self.missing_value, path);
                truth.is_some() && prediction == truth
            })
            .count();
        n_correct as f64 / examples.len() as f64
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the number of nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Classifier for Id3Classifier {
    #[inline]
    fn predict<'a>(&'a self, example: &Example) -> Option<&'a str> {
        self.classify(example)
    }
}
