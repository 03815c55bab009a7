//! The ID3 decision tree: induction, classification, and pruning.

/// Defines the ID3 algorithm.
pub mod id3;
/// Defines the builder of `Id3`.
pub mod builder;
/// Defines the classifier produced by `Id3`.
pub mod id3_classifier;
/// Defines reduced-error pruning.
pub mod pruner;
/// Defines the tree nodes.
pub mod node;

mod entropy;


pub use id3::Id3;
pub use builder::{Id3Builder, AttributeOrder};
pub use id3_classifier::Id3Classifier;
pub use pruner::{Pruner, PruneStrategy};
pub use node::Node;
pub use entropy::{entropy, gain, majority_class};


use crate::{Classifier, Example};


/// Grow an ID3 tree on `examples` with the default settings.
/// `default` is the label predicted when `examples` is empty.
/// Missing values of `examples` are imputed in place.
pub fn build<D: ToString>(examples: &mut [Example], default: D)
    -> Id3Classifier
{
    Id3Builder::new()
        .default_label(default)
        .build()
        .fit(examples)
}


/// Prune `tree` with a single breadth-first,
/// first-improvement pass against `validation`.
pub fn prune(mut tree: Id3Classifier, validation: &[Example])
    -> Id3Classifier
{
    Pruner::new().prune(&mut tree, validation);
    tree
}


/// Returns the class label that `tree` assigns to `example`.
#[inline]
pub fn classify<'a>(tree: &'a Id3Classifier, example: &Example)
    -> Option<&'a str>
{
    tree.predict(example)
}


/// Returns the fraction of `examples` that `tree` classifies correctly.
#[inline]
pub fn score(tree: &Id3Classifier, examples: &[Example]) -> f64 {
    tree.score(examples)
}
