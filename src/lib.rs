#![warn(missing_docs)]

//!
//! A crate that provides the ID3 decision tree algorithm
//! for categorical data.
//!
//! - [`Id3`] grows a decision tree by choosing,
//!     at each node, the attribute with the largest information gain.
//!     Missing values are imputed before training (see [`Imputer`]).
//! - [`Id3Classifier`] classifies an example by walking the tree.
//!     An attribute value unseen in training falls back to
//!     the majority class of the node.
//! - [`Pruner`] performs reduced-error pruning with a validation set.
//!
//! ```
//! use miniid3::prelude::*;
//!
//! let mut train = vec![
//!     Example::from([("a", 1), ("b", 0), ("c", 0), ("Class", 1)]),
//!     Example::from([("a", 1), ("b", 1), ("c", 0), ("Class", 1)]),
//!     Example::from([("a", 0), ("b", 0), ("c", 0), ("Class", 0)]),
//!     Example::from([("a", 0), ("b", 1), ("c", 0), ("Class", 1)]),
//! ];
//! let tree = miniid3::build(&mut train, 0);
//! assert_eq!(miniid3::score(&tree, &train), 1.0);
//! ```

pub mod constants;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod research;
pub mod prelude;

pub(crate) mod checkers;


pub use sample::{Example, Sample, SampleReader, Imputer};
pub use classifier::Classifier;

pub use decision_tree::{
    Id3,
    Id3Builder,
    Id3Classifier,
    AttributeOrder,
    Node,
    Pruner,
    PruneStrategy,
};

pub use decision_tree::{
    build,
    prune,
    classify,
    score,
    entropy,
    gain,
    majority_class,
};
